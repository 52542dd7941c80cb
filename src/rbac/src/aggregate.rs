//! Aggregation layer
//!
//! Derives lists from a granted set and the static catalogs. Outputs follow
//! catalog declaration order, so repeated calls with the same input return
//! identical lists.

use crate::catalog::{ActionId, FeatureId, PageId, Permission, PermissionCategory};
use crate::types::PermissionSet;

/// Pages whose guarding permission is granted
pub fn accessible_pages(granted: &PermissionSet) -> Vec<PageId> {
    PageId::ALL
        .iter()
        .copied()
        .filter(|page| granted.contains(page.permission()))
        .collect()
}

/// Actions whose guarding permission is granted
pub fn available_actions(granted: &PermissionSet) -> Vec<ActionId> {
    ActionId::ALL
        .iter()
        .copied()
        .filter(|action| granted.contains(action.permission()))
        .collect()
}

/// Features whose guarding permission is granted
pub fn enabled_features(granted: &PermissionSet) -> Vec<FeatureId> {
    FeatureId::ALL
        .iter()
        .copied()
        .filter(|feature| granted.contains(feature.permission()))
        .collect()
}

/// Permissions displayed under `category`.
///
/// Categories are a presentation grouping, not an access boundary, so an
/// unknown category yields an empty list rather than an error.
pub fn permissions_by_category(category: &str) -> Vec<Permission> {
    match PermissionCategory::from_id(category) {
        Some(category) => permissions_in(category),
        None => Vec::new(),
    }
}

/// Permissions displayed under a typed category
pub fn permissions_in(category: PermissionCategory) -> Vec<Permission> {
    Permission::ALL
        .iter()
        .copied()
        .filter(|permission| permission.category() == category)
        .collect()
}

/// Granted permissions grouped by category, categories in catalog order.
/// Categories with no granted permission are omitted.
pub fn group_by_category(granted: &PermissionSet) -> Vec<(PermissionCategory, Vec<Permission>)> {
    PermissionCategory::ALL
        .iter()
        .filter_map(|category| {
            let members: Vec<Permission> = granted
                .iter()
                .filter(|permission| permission.category() == *category)
                .collect();
            (!members.is_empty()).then_some((*category, members))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_follow_grants() {
        let granted = PermissionSet::from([Permission::AccessProfile, Permission::AccessAuditLogs]);
        // Catalog order, not insertion order
        assert_eq!(accessible_pages(&granted), vec![PageId::AuditLogs, PageId::Profile]);
        assert!(accessible_pages(&PermissionSet::new()).is_empty());
    }

    #[test]
    fn test_shared_action_guards() {
        let granted = PermissionSet::from([Permission::ViewAuditLogs, Permission::ViewCampaignStats]);
        assert_eq!(
            available_actions(&granted),
            vec![ActionId::ViewCampaignStats, ActionId::ViewAuditLogs]
        );
    }

    #[test]
    fn test_features() {
        let granted = PermissionSet::from([Permission::DarkMode]);
        assert_eq!(enabled_features(&granted), vec![FeatureId::DarkMode]);
    }

    #[test]
    fn test_permissions_by_category() {
        let audit = permissions_by_category("audit");
        assert!(audit.contains(&Permission::ViewAuditLogs));
        assert!(audit.iter().all(|p| p.category() == PermissionCategory::Audit));
    }

    #[test]
    fn test_unknown_category_is_empty_not_error() {
        assert!(permissions_by_category("nonexistent-category").is_empty());
        assert!(permissions_by_category("").is_empty());
    }

    #[test]
    fn test_categories_partition_the_catalog() {
        let total: usize = PermissionCategory::ALL
            .iter()
            .map(|category| permissions_in(*category).len())
            .sum();
        assert_eq!(total, Permission::ALL.len());
    }

    #[test]
    fn test_group_by_category() {
        let granted = PermissionSet::from([
            Permission::ExportReports,
            Permission::LoginSso,
            Permission::ViewAnalytics,
        ]);
        let groups = group_by_category(&granted);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, PermissionCategory::Analytics);
        assert_eq!(groups[0].1, vec![Permission::ViewAnalytics, Permission::ExportReports]);
        assert_eq!(groups[1], (PermissionCategory::System, vec![Permission::LoginSso]));
    }
}
