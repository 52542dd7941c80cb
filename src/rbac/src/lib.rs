//! # ITAS Access Control
//!
//! Role-based access control resolution for the ITAS tax education portal.
//!
//! ## Features
//!
//! - **Closed catalogs** of roles, permissions, pages, actions and features
//! - **Permission queries** over a granted set (`has_permission`, `has_any`, `has_all`)
//! - **Route resolution** with `{name}` placeholder patterns
//! - **Startup validation** of every declarative table
//! - **Guards** for conditional rendering and wrapped handlers, sync or async
//!
//! ## Example
//!
//! ```rust
//! use itas_rbac::{has_permission, AccessRegistry, Permission, Role};
//!
//! let registry = AccessRegistry::builtin()?;
//!
//! let granted = registry.permissions_for(Role::Taxpayer)?;
//! assert!(has_permission(granted, Permission::EnrollCourses));
//!
//! assert!(registry.can_access_route("TAXPAYER", "/taxpayer/course/42")?);
//! assert!(registry.permissions_for("GHOST").is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod builtin;
pub mod catalog;
pub mod dashboard;
pub mod definition;
pub mod error;
pub mod grants;
pub mod guard;
pub mod menu;
pub mod query;
pub mod registry;
pub mod routes;
pub mod types;

// Re-export commonly used types
pub use aggregate::{
    accessible_pages, available_actions, enabled_features, group_by_category, permissions_by_category,
    permissions_in,
};
pub use catalog::{
    is_valid_permission, permission_description, ActionId, AsRole, FeatureId, PageId, Permission,
    PermissionCategory, Role,
};
pub use dashboard::{DashboardMetric, MetricKey, FALLBACK_ROLE};
pub use definition::RegistryDefinition;
pub use error::{IntegrityError, PatternError, RbacError, Result, UnknownRoleError};
pub use guard::{with_permission, GuardOutcome, Guarded, PermissionGate};
pub use menu::{MenuItem, MenuSection};
pub use query::{has_all, has_any, has_permission, has_permission_id, Requirement};
pub use registry::AccessRegistry;
pub use routes::{RoutePattern, RouteTable};
pub use types::PermissionSet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
