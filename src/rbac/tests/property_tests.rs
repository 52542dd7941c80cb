//! Property-based tests for queries, route matching and aggregation

use itas_rbac::{
    accessible_pages, available_actions, has_all, has_any, AccessRegistry, Permission, PermissionSet,
    RoutePattern, Role,
};
use proptest::prelude::*;

fn any_permission() -> impl Strategy<Value = Permission> {
    proptest::sample::select(Permission::ALL.to_vec())
}

fn any_granted() -> impl Strategy<Value = PermissionSet> {
    proptest::collection::vec(any_permission(), 0..40).prop_map(|perms| perms.into_iter().collect())
}

fn any_role() -> impl Strategy<Value = Role> {
    proptest::sample::select(Role::ALL.to_vec())
}

// ============================================================================
// CATALOG INVARIANTS
// ============================================================================

#[test]
fn test_every_role_grant_is_non_empty_and_catalogued() {
    let registry = AccessRegistry::builtin().unwrap();
    for role in Role::ALL {
        let granted = registry.permissions_for(*role).unwrap();
        assert!(!granted.is_empty());
        for permission in granted.iter() {
            assert!(Permission::ALL.contains(&permission));
        }
    }
}

#[test]
fn test_every_route_pattern_has_a_literal_segment() {
    let registry = AccessRegistry::builtin().unwrap();
    for role in Role::ALL {
        for pattern in registry.accessible_routes(*role).unwrap() {
            let reparsed = RoutePattern::new(pattern.as_str()).unwrap();
            assert!(reparsed.placeholders().count() < reparsed.depth());
        }
    }
}

#[test]
fn test_segment_count_sensitivity() {
    let with_id = RoutePattern::new("/admin/analytics/{id}").unwrap();
    let without = RoutePattern::new("/admin/analytics").unwrap();

    assert!(!with_id.matches("/admin/analytics"));
    assert!(!without.matches("/admin/analytics/7"));
}

// ============================================================================
// QUERY PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn test_empty_requirement_lists(granted in any_granted()) {
        prop_assert!(has_all(&granted, &[]));
        prop_assert!(!has_any(&granted, &[]));
    }

    #[test]
    fn test_all_implies_any(
        granted in any_granted(),
        required in proptest::collection::vec(any_permission(), 1..8)
    ) {
        if has_all(&granted, &required) {
            prop_assert!(has_any(&granted, &required));
        }
    }

    #[test]
    fn test_granted_members_are_held(granted in any_granted()) {
        let members = granted.to_vec();
        prop_assert!(has_all(&granted, &members));
    }

    #[test]
    fn test_aggregation_is_idempotent(granted in any_granted()) {
        prop_assert_eq!(accessible_pages(&granted), accessible_pages(&granted));
        prop_assert_eq!(available_actions(&granted), available_actions(&granted));
    }

    #[test]
    fn test_insertion_order_does_not_matter(perms in proptest::collection::vec(any_permission(), 0..20)) {
        let forward: PermissionSet = perms.iter().collect();
        let backward: PermissionSet = perms.iter().rev().collect();
        prop_assert_eq!(accessible_pages(&forward), accessible_pages(&backward));
    }
}

// ============================================================================
// ROUTE PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn test_placeholder_matches_any_single_segment(id in "[A-Za-z0-9_-]{1,16}") {
        let pattern = RoutePattern::new("/taxpayer/course/{id}").unwrap();
        let path = format!("/taxpayer/course/{}", id);

        prop_assert!(pattern.matches(&path));
        let captures = pattern.captures(&path).unwrap();
        prop_assert_eq!(captures.get("id").map(String::as_str), Some(id.as_str()));
        let nested = format!("{}/extra", path);
        prop_assert!(!pattern.matches(&nested));
    }

    #[test]
    fn test_literal_patterns_match_only_themselves(suffix in "[a-z]{1,8}") {
        let pattern = RoutePattern::new("/admin/analytics").unwrap();
        let other = format!("/admin/analytics-{}", suffix);
        prop_assert!(!pattern.matches(&other));
        prop_assert!(pattern.matches("/admin/analytics"));
    }

    #[test]
    fn test_route_checks_are_stable(role in any_role(), path in "/[a-z/-]{0,30}") {
        let registry = AccessRegistry::builtin().unwrap();
        let first = registry.can_access_route(role, &path).unwrap();
        let second = registry.can_access_route(role.as_str(), &path).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_identifiers_always_fail(id in "[a-z]{1,12}") {
        let registry = AccessRegistry::builtin().unwrap();
        // Catalog identifiers are upper case, so lower-case input is never a role
        prop_assert!(registry.permissions_for(id.as_str()).is_err());
        prop_assert!(registry.accessible_pages_for(id.as_str()).is_err());
    }
}
