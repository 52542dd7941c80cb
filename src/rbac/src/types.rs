//! Core access-control types

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Permission;

/// A set of granted permissions.
///
/// Iteration follows catalog declaration order, so every list derived from a
/// set is stable across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    permissions: BTreeSet<Permission>,
}

impl PermissionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `permission` is a member
    pub fn contains(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Add a permission, returning whether it was newly inserted
    pub fn insert(&mut self, permission: Permission) -> bool {
        self.permissions.insert(permission)
    }

    /// Number of permissions in the set
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Iterate in catalog order
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.permissions.iter().copied()
    }

    /// Whether every member of `self` is also in `other`
    pub fn is_subset(&self, other: &PermissionSet) -> bool {
        self.permissions.is_subset(&other.permissions)
    }

    /// Collected as a vector, in catalog order
    pub fn to_vec(&self) -> Vec<Permission> {
        self.iter().collect()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = &'a Permission>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl From<&[Permission]> for PermissionSet {
    fn from(permissions: &[Permission]) -> Self {
        permissions.iter().collect()
    }
}

impl<const N: usize> From<[Permission; N]> for PermissionSet {
    fn from(permissions: [Permission; N]) -> Self {
        permissions.into_iter().collect()
    }
}

impl Extend<Permission> for PermissionSet {
    fn extend<I: IntoIterator<Item = Permission>>(&mut self, iter: I) {
        self.permissions.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_deduplicates_and_orders() {
        let set = PermissionSet::from([
            Permission::ViewAnalytics,
            Permission::LoginSso,
            Permission::ViewAnalytics,
        ]);

        assert_eq!(set.len(), 2);
        // LOGIN_SSO is declared first in the catalog
        assert_eq!(set.to_vec(), vec![Permission::LoginSso, Permission::ViewAnalytics]);
    }

    #[test]
    fn test_subset() {
        let small = PermissionSet::from([Permission::LoginSso]);
        let large = PermissionSet::from([Permission::LoginSso, Permission::ManageUsers]);

        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(PermissionSet::new().is_subset(&small));
    }

    #[test]
    fn test_serializes_as_identifier_list() {
        let set = PermissionSet::from([Permission::ExportReports, Permission::LoginSso]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["LOGIN_SSO","EXPORT_REPORTS"]"#);

        let back: PermissionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
