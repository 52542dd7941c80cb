//! Access registry
//!
//! Validates a [`RegistryDefinition`] once at startup and serves every
//! role-keyed lookup from the resulting immutable tables. The registry is a
//! plain value: share it behind an `Arc` or a `static` as the host sees fit.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::aggregate;
use crate::catalog::{ActionId, AsRole, FeatureId, PageId, Permission, Role};
use crate::dashboard::{DashboardCatalog, DashboardMetric, MetricKey, FALLBACK_ROLE};
use crate::definition::{MenuSectionDefinition, MetricDefinition, RegistryDefinition};
use crate::error::{IntegrityError, UnknownRoleError};
use crate::grants::RoleGrants;
use crate::menu::{MenuCatalog, MenuItem, MenuSection};
use crate::routes::{RoutePattern, RouteTable};
use crate::types::PermissionSet;

/// Validated, immutable access-control tables
#[derive(Debug, Clone)]
pub struct AccessRegistry {
    grants: RoleGrants,
    routes: RouteTable,
    menus: MenuCatalog,
    dashboards: DashboardCatalog,
}

impl AccessRegistry {
    /// Registry built from the compiled-in tables
    pub fn builtin() -> Result<Self, IntegrityError> {
        Self::from_definition(&RegistryDefinition::builtin())
    }

    /// Validate `definition` and build the registry.
    ///
    /// Fails on the first integrity violation; no partial registry is
    /// ever returned.
    pub fn from_definition(definition: &RegistryDefinition) -> Result<Self, IntegrityError> {
        let grants = build_grants(&definition.grants)?;
        let routes = build_routes(&definition.routes)?;
        let menus = build_menus(&definition.menus)?;
        let dashboards = build_dashboards(&definition.dashboards)?;

        info!(
            roles = Role::ALL.len(),
            routes = routes.len(),
            menu_items = menus.item_count(),
            "access registry initialized"
        );

        Ok(Self {
            grants,
            routes,
            menus,
            dashboards,
        })
    }

    /// Grant set of `role`
    pub fn permissions_for(&self, role: impl AsRole) -> Result<&PermissionSet, UnknownRoleError> {
        self.grants.permissions_for(resolve(&role)?)
    }

    /// Whether `role` may navigate to `path`
    pub fn can_access_route(&self, role: impl AsRole, path: &str) -> Result<bool, UnknownRoleError> {
        self.routes.can_access(resolve(&role)?, path)
    }

    /// Route patterns declared for `role`
    pub fn accessible_routes(&self, role: impl AsRole) -> Result<&[RoutePattern], UnknownRoleError> {
        self.routes.patterns(resolve(&role)?)
    }

    /// Pages whose guard permission `role` holds
    pub fn accessible_pages_for(&self, role: impl AsRole) -> Result<Vec<PageId>, UnknownRoleError> {
        Ok(aggregate::accessible_pages(self.permissions_for(role)?))
    }

    /// Actions whose guard permission `role` holds
    pub fn available_actions_for(&self, role: impl AsRole) -> Result<Vec<ActionId>, UnknownRoleError> {
        Ok(aggregate::available_actions(self.permissions_for(role)?))
    }

    /// Features whose guard permission `role` holds
    pub fn enabled_features_for(&self, role: impl AsRole) -> Result<Vec<FeatureId>, UnknownRoleError> {
        Ok(aggregate::enabled_features(self.permissions_for(role)?))
    }

    /// Navigation items visible to `role`
    pub fn menu_items(&self, role: impl AsRole) -> Result<Vec<MenuItem>, UnknownRoleError> {
        Ok(self.menus.items_for(resolve(&role)?))
    }

    /// Labelled dashboard metrics for `role`, falling back to the Taxpayer
    /// list for unknown or unmapped roles
    pub fn dashboard_metrics(&self, role: impl AsRole) -> &[DashboardMetric] {
        self.dashboards.metrics_for(role)
    }

    /// Dashboard metric keys for `role`, with the same fallback
    pub fn dashboard_metric_keys(&self, role: impl AsRole) -> Vec<MetricKey> {
        self.dashboards.keys_for(role)
    }

    /// The role-permission map
    pub fn grants(&self) -> &RoleGrants {
        &self.grants
    }

    /// The route table
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The menu catalog
    pub fn menus(&self) -> &MenuCatalog {
        &self.menus
    }

    /// The dashboard catalog
    pub fn dashboards(&self) -> &DashboardCatalog {
        &self.dashboards
    }
}

fn resolve(role: &impl AsRole) -> Result<Role, UnknownRoleError> {
    role.as_role().map_err(|err| {
        warn!(role = %err.role, "rejected unknown role");
        err
    })
}

fn catalog_role(table: &'static str, id: &str) -> Result<Role, IntegrityError> {
    Role::from_id(id).ok_or_else(|| {
        warn!(table, role = id, "definition references unknown role");
        IntegrityError::UnknownRole {
            table,
            role: id.to_string(),
        }
    })
}

fn ensure_total<V>(table: &'static str, map: &BTreeMap<Role, V>) -> Result<(), IntegrityError> {
    match Role::ALL.iter().find(|role| !map.contains_key(role)) {
        Some(role) => Err(IntegrityError::MissingRole {
            table,
            role: role.as_str().to_string(),
        }),
        None => Ok(()),
    }
}

fn build_grants(raw: &BTreeMap<String, Vec<String>>) -> Result<RoleGrants, IntegrityError> {
    let mut grants = BTreeMap::new();

    for (id, permissions) in raw {
        let role = catalog_role("grants", id)?;
        if permissions.is_empty() {
            return Err(IntegrityError::EmptyGrant(id.clone()));
        }

        let set = permissions
            .iter()
            .map(|permission| {
                Permission::from_id(permission).ok_or_else(|| IntegrityError::UnknownPermission {
                    role: id.clone(),
                    permission: permission.clone(),
                })
            })
            .collect::<Result<PermissionSet, _>>()?;

        debug!(role = %role, permissions = set.len(), "loaded grant set");
        grants.insert(role, set);
    }

    ensure_total("grants", &grants)?;
    Ok(RoleGrants::new(grants))
}

fn build_routes(raw: &BTreeMap<String, Vec<String>>) -> Result<RouteTable, IntegrityError> {
    let mut routes = BTreeMap::new();

    for (id, patterns) in raw {
        let role = catalog_role("routes", id)?;
        let parsed = patterns
            .iter()
            .map(|pattern| {
                RoutePattern::new(pattern).map_err(|source| IntegrityError::InvalidRoutePattern {
                    role: id.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        routes.insert(role, parsed);
    }

    ensure_total("routes", &routes)?;
    Ok(RouteTable::new(routes))
}

fn build_menus(raw: &[MenuSectionDefinition]) -> Result<MenuCatalog, IntegrityError> {
    let mut sections = Vec::with_capacity(raw.len());

    for section in raw {
        let audience = section
            .audience
            .iter()
            .map(|id| {
                Role::from_id(id).ok_or_else(|| IntegrityError::UnknownMenuAudience {
                    section: section.name.clone(),
                    role: id.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut items = Vec::with_capacity(section.items.len());
        for item in &section.items {
            let mut menu_item = MenuItem::new(&item.label, &item.path, &item.icon);

            if let Some(ids) = &item.roles {
                if ids.is_empty() {
                    return Err(IntegrityError::EmptyMenuRestriction(item.label.clone()));
                }

                // A restriction can only narrow the section's audience
                let roles = ids
                    .iter()
                    .map(|id| match Role::from_id(id) {
                        Some(role) if audience.contains(&role) => Ok(role),
                        _ => Err(IntegrityError::InvalidMenuRestriction {
                            label: item.label.clone(),
                            role: id.clone(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                menu_item = menu_item.restricted_to(roles);
            }

            items.push(menu_item);
        }

        sections.push(MenuSection {
            name: section.name.clone(),
            audience,
            items,
        });
    }

    Ok(MenuCatalog::new(sections))
}

fn build_dashboards(raw: &BTreeMap<String, Vec<MetricDefinition>>) -> Result<DashboardCatalog, IntegrityError> {
    let mut metrics = BTreeMap::new();

    for (id, entries) in raw {
        let role = catalog_role("dashboards", id)?;
        let list = entries
            .iter()
            .map(|entry| DashboardMetric::new(&entry.label, &entry.key))
            .collect::<Vec<_>>();
        metrics.insert(role, list);
    }

    let fallback = metrics
        .get(&FALLBACK_ROLE)
        .cloned()
        .ok_or_else(|| IntegrityError::MissingDashboardFallback(FALLBACK_ROLE.as_str().to_string()))?;
    if fallback.is_empty() {
        return Err(IntegrityError::EmptyDashboardFallback(FALLBACK_ROLE.as_str().to_string()));
    }

    Ok(DashboardCatalog::new(metrics, fallback))
}
