//! Permission Query Engine
//!
//! Pure checks of a caller-supplied [`PermissionSet`]. Nothing here touches
//! shared state, so every function is safe to call from any thread.

use serde::{Deserialize, Serialize};

use crate::catalog::Permission;
use crate::types::PermissionSet;

/// `true` iff `required` is in `granted`
pub fn has_permission(granted: &PermissionSet, required: Permission) -> bool {
    granted.contains(required)
}

/// Check a raw identifier. Identifiers outside the catalog are never members.
pub fn has_permission_id(granted: &PermissionSet, required: &str) -> bool {
    Permission::from_id(required).is_some_and(|permission| granted.contains(permission))
}

/// `true` iff at least one of `required` is granted.
///
/// An empty requirement list is never satisfied: there is nothing to match.
pub fn has_any(granted: &PermissionSet, required: &[Permission]) -> bool {
    required.iter().any(|permission| granted.contains(*permission))
}

/// `true` iff every one of `required` is granted.
///
/// An empty requirement list is always satisfied, the opposite of [`has_any`].
pub fn has_all(granted: &PermissionSet, required: &[Permission]) -> bool {
    required.iter().all(|permission| granted.contains(*permission))
}

/// What a guarded block or handler demands of the granted set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "permissions")]
pub enum Requirement {
    /// A single permission
    Permission(Permission),
    /// At least one of the listed permissions
    Any(Vec<Permission>),
    /// Every listed permission
    All(Vec<Permission>),
}

impl Requirement {
    /// Require any of `permissions`
    pub fn any(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::Any(permissions.into_iter().collect())
    }

    /// Require all of `permissions`
    pub fn all(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::All(permissions.into_iter().collect())
    }

    /// Evaluate against a granted set
    pub fn is_satisfied_by(&self, granted: &PermissionSet) -> bool {
        match self {
            Requirement::Permission(permission) => has_permission(granted, *permission),
            Requirement::Any(permissions) => has_any(granted, permissions),
            Requirement::All(permissions) => has_all(granted, permissions),
        }
    }
}

impl From<Permission> for Requirement {
    fn from(permission: Permission) -> Self {
        Requirement::Permission(permission)
    }
}

/// A bare list means "any of", matching how list guards behave in the portal
impl From<Vec<Permission>> for Requirement {
    fn from(permissions: Vec<Permission>) -> Self {
        Requirement::Any(permissions)
    }
}

impl<const N: usize> From<[Permission; N]> for Requirement {
    fn from(permissions: [Permission; N]) -> Self {
        Requirement::Any(permissions.to_vec())
    }
}
