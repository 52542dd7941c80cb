//! Role-Permission Map

use std::collections::BTreeMap;

use crate::catalog::Role;
use crate::error::UnknownRoleError;
use crate::types::PermissionSet;

/// Static association from each role to its explicit grant set.
///
/// Every role, the administrative ones included, enumerates its permissions;
/// there is no wildcard grant.
#[derive(Debug, Clone, Default)]
pub struct RoleGrants {
    grants: BTreeMap<Role, PermissionSet>,
}

impl RoleGrants {
    /// Build from validated grant sets
    pub(crate) fn new(grants: BTreeMap<Role, PermissionSet>) -> Self {
        Self { grants }
    }

    /// Grant set of `role`
    pub fn permissions_for(&self, role: Role) -> Result<&PermissionSet, UnknownRoleError> {
        self.grants
            .get(&role)
            .ok_or_else(|| UnknownRoleError::new(role.as_str()))
    }

    /// Roles with an entry, in catalog order
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.grants.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Permission;

    fn grants() -> RoleGrants {
        let mut map = BTreeMap::new();
        map.insert(
            Role::Taxpayer,
            PermissionSet::from([Permission::LoginSso, Permission::EnrollCourses]),
        );
        map.insert(
            Role::MorStaff,
            PermissionSet::from([
                Permission::LoginSso,
                Permission::EnrollCourses,
                Permission::AccessInternalTraining,
            ]),
        );
        RoleGrants::new(map)
    }

    #[test]
    fn test_permissions_for() {
        let grants = grants();
        let taxpayer = grants.permissions_for(Role::Taxpayer).unwrap();
        assert!(taxpayer.contains(Permission::EnrollCourses));
        assert!(!taxpayer.contains(Permission::AccessInternalTraining));
    }

    #[test]
    fn test_missing_entry_is_an_error_not_empty() {
        let grants = grants();
        assert!(grants.permissions_for(Role::Auditor).is_err());
    }
}
