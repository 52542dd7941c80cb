//! Guard boundary integration tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use itas_rbac::{
    with_permission, AccessRegistry, GuardOutcome, Permission, PermissionGate, PermissionSet, Requirement, Role,
};
use proptest::prelude::*;
use tokio::time::{sleep, Duration};

// ============================================================================
// RENDER GATES
// ============================================================================

#[test]
fn test_gate_against_role_grants() {
    let registry = AccessRegistry::builtin().unwrap();
    let gate = PermissionGate::new(Permission::UploadContent);

    let content_admin = registry.permissions_for(Role::ContentAdmin).unwrap();
    let taxpayer = registry.permissions_for(Role::Taxpayer).unwrap();

    assert_eq!(gate.render(content_admin, || "upload", || "fallback"), "upload");
    assert_eq!(gate.render(taxpayer, || "upload", || "fallback"), "fallback");
}

#[test]
fn test_any_gate_for_reporting_roles() {
    let registry = AccessRegistry::builtin().unwrap();
    let gate = PermissionGate::new(Requirement::any([Permission::ViewAnalytics, Permission::ExportReports]));

    for role in [Role::Manager, Role::SystemAdmin, Role::Auditor] {
        assert!(gate.allows(registry.permissions_for(role).unwrap()), "{} should pass", role);
    }
    assert!(!gate.allows(registry.permissions_for(Role::MorStaff).unwrap()));
}

#[test]
fn test_requirement_from_json() {
    let requirement: Requirement =
        serde_json::from_str(r#"{"mode": "all", "permissions": ["MANAGE_USERS", "ASSIGN_ROLES"]}"#).unwrap();
    assert_eq!(
        requirement,
        Requirement::all([Permission::ManageUsers, Permission::AssignRoles])
    );

    let registry = AccessRegistry::builtin().unwrap();
    assert!(requirement.is_satisfied_by(registry.permissions_for(Role::SystemAdmin).unwrap()));
}

// ============================================================================
// WRAPPED HANDLERS
// ============================================================================

#[tokio::test]
async fn test_async_handler_permitted() {
    let registry = AccessRegistry::builtin().unwrap();
    let granted = registry.permissions_for(Role::CommOfficer).unwrap();

    let send = with_permission(
        |recipients: usize| async move {
            sleep(Duration::from_millis(1)).await;
            recipients * 2
        },
        Permission::SendEmail,
    );

    assert_eq!(send.call_async(granted, 21).await, GuardOutcome::Permitted(42));
}

#[tokio::test]
async fn test_async_handler_denied_never_runs() {
    let registry = AccessRegistry::builtin().unwrap();
    let granted = registry.permissions_for(Role::Taxpayer).unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let delete = with_permission(
        move |_: ()| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        },
        Permission::DeleteContent,
    );

    let outcome = delete.call_async(granted, ()).await;
    assert!(outcome.is_denied());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_concurrent_guarded_calls() {
    let registry = Arc::new(AccessRegistry::builtin().unwrap());
    let mut handles = Vec::new();

    for role in Role::ALL {
        let registry = registry.clone();
        let role = *role;
        handles.push(tokio::spawn(async move {
            let granted = registry.permissions_for(role).unwrap();
            let guarded = with_permission(|r: Role| r.as_str().len(), Permission::ViewAnalytics);
            (role, guarded.call(granted, role).is_permitted())
        }));
    }

    for handle in handles {
        let (role, permitted) = handle.await.unwrap();
        let expected = matches!(role, Role::Manager | Role::SystemAdmin | Role::Auditor);
        assert_eq!(permitted, expected, "unexpected outcome for {}", role);
    }
}

proptest! {
    #[test]
    fn test_async_outcome_follows_requirement(
        granted in proptest::collection::vec(proptest::sample::select(Permission::ALL.to_vec()), 0..12),
        required in proptest::sample::select(Permission::ALL.to_vec())
    ) {
        let granted: PermissionSet = granted.into_iter().collect();
        let expected = granted.contains(required);

        let outcome = tokio_test::block_on(async {
            let guarded = with_permission(|value: u8| async move { value }, required);
            guarded.call_async(&granted, 7).await
        });

        prop_assert_eq!(outcome.is_permitted(), expected);
    }
}
