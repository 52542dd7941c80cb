//! Declarative registry definition
//!
//! The untyped, serde-loadable form of every table the registry is built
//! from. Identifiers are plain strings here; turning a definition into an
//! [`AccessRegistry`](crate::AccessRegistry) validates all of them.
//!
//! # Format
//!
//! ```json
//! {
//!   "grants": { "TAXPAYER": ["LOGIN_SSO", "ENROLL_COURSES"] },
//!   "routes": { "TAXPAYER": ["/taxpayer/dashboard", "/taxpayer/course/{id}"] },
//!   "menus": [
//!     {
//!       "name": "taxpayer",
//!       "audience": ["TAXPAYER"],
//!       "items": [{ "label": "Dashboard", "path": "/taxpayer/dashboard", "icon": "Dashboard" }]
//!     }
//!   ],
//!   "dashboards": { "TAXPAYER": [{ "label": "Certificates", "key": "certificates" }] }
//! }
//! ```

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::builtin;
use crate::error::Result;

/// A menu item with a raw restriction list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDefinition {
    /// Display label
    pub label: String,
    /// Target route
    pub path: String,
    /// Icon reference
    pub icon: String,
    /// Restricting role identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// A menu section with a raw audience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSectionDefinition {
    /// Section name
    pub name: String,
    /// Role identifiers that see the section
    pub audience: Vec<String>,
    /// Items in display order
    #[serde(default)]
    pub items: Vec<MenuItemDefinition>,
}

/// A labelled dashboard metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Display label
    pub label: String,
    /// Metric key
    pub key: String,
}

/// Every table the registry is constructed from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDefinition {
    /// Role identifier to permission identifiers
    #[serde(deserialize_with = "unique_role_keys")]
    pub grants: BTreeMap<String, Vec<String>>,

    /// Role identifier to route patterns
    #[serde(deserialize_with = "unique_role_keys")]
    pub routes: BTreeMap<String, Vec<String>>,

    /// Menu sections
    #[serde(default)]
    pub menus: Vec<MenuSectionDefinition>,

    /// Role identifier to dashboard metrics; need not be total but must
    /// contain the fallback role
    #[serde(default, deserialize_with = "unique_role_keys")]
    pub dashboards: BTreeMap<String, Vec<MetricDefinition>>,
}

impl RegistryDefinition {
    /// The product's compiled-in tables
    pub fn builtin() -> Self {
        let grants = builtin::GRANTS
            .iter()
            .map(|(role, permissions)| {
                (
                    role.as_str().to_string(),
                    permissions.iter().map(|p| p.as_str().to_string()).collect(),
                )
            })
            .collect();

        let routes = builtin::ROUTES
            .iter()
            .map(|(role, patterns)| {
                (
                    role.as_str().to_string(),
                    patterns.iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect();

        let menus = builtin::MENUS
            .iter()
            .map(|(name, audience, items)| MenuSectionDefinition {
                name: name.to_string(),
                audience: audience.iter().map(|r| r.as_str().to_string()).collect(),
                items: items
                    .iter()
                    .map(|(label, path, icon, roles)| MenuItemDefinition {
                        label: label.to_string(),
                        path: path.to_string(),
                        icon: icon.to_string(),
                        roles: roles.map(|roles| roles.iter().map(|r| r.as_str().to_string()).collect()),
                    })
                    .collect(),
            })
            .collect();

        let dashboards = builtin::DASHBOARDS
            .iter()
            .map(|(role, metrics)| {
                (
                    role.as_str().to_string(),
                    metrics
                        .iter()
                        .map(|(label, key)| MetricDefinition {
                            label: label.to_string(),
                            key: key.to_string(),
                        })
                        .collect(),
                )
            })
            .collect();

        Self {
            grants,
            routes,
            menus,
            dashboards,
        }
    }

    /// Parse a JSON definition
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON definition from a reader
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Role-keyed table that rejects a role listed twice instead of keeping
/// the last entry
fn unique_role_keys<'de, D, V>(deserializer: D) -> std::result::Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueRoleKeys<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueRoleKeys<V> {
        type Value = BTreeMap<String, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map keyed by role identifier")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
            let mut table = BTreeMap::new();
            while let Some((role, value)) = access.next_entry::<String, V>()? {
                match table.entry(role) {
                    Entry::Occupied(entry) => {
                        return Err(de::Error::custom(format_args!("duplicate role '{}'", entry.key())));
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(value);
                    }
                }
            }
            Ok(table)
        }
    }

    deserializer.deserialize_map(UniqueRoleKeys(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RbacError;

    #[test]
    fn test_builtin_covers_every_role() {
        let def = RegistryDefinition::builtin();
        assert_eq!(def.grants.len(), 8);
        assert_eq!(def.routes.len(), 8);
        assert_eq!(def.dashboards.len(), 8);
        assert_eq!(def.menus.len(), 3);
        assert!(def.grants["TAXPAYER"].contains(&"ENROLL_COURSES".to_string()));
    }

    #[test]
    fn test_json_round_trip() {
        let def = RegistryDefinition::builtin();
        let json = def.to_json().unwrap();
        assert_eq!(RegistryDefinition::from_json(&json).unwrap(), def);
    }

    #[test]
    fn test_optional_sections_default() {
        let def = RegistryDefinition::from_json(r#"{"grants": {}, "routes": {}}"#).unwrap();
        assert!(def.menus.is_empty());
        assert!(def.dashboards.is_empty());
    }

    #[test]
    fn test_repeated_role_is_rejected() {
        let json = r#"{
            "grants": { "TAXPAYER": ["LOGIN_SSO", "ENROLL_COURSES"], "TAXPAYER": ["LOGIN_SSO"] },
            "routes": {}
        }"#;
        let err = RegistryDefinition::from_json(json).unwrap_err();
        assert!(matches!(err, RbacError::Definition(_)));
        assert!(err.to_string().contains("duplicate role 'TAXPAYER'"));

        let json = r#"{
            "grants": {},
            "routes": {},
            "dashboards": { "AUDITOR": [], "AUDITOR": [] }
        }"#;
        assert!(RegistryDefinition::from_json(json).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = RegistryDefinition::from_json("{ not json").unwrap_err();
        assert!(matches!(err, RbacError::Definition(_)));
    }
}
