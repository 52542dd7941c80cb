//! Closed catalogs of roles, permissions and guarded surfaces
//!
//! All identifiers are string-backed enums so that membership is checked by
//! the compiler wherever values originate inside the crate. Identifiers
//! arriving from outside go through `from_id` / [`AsRole`].

mod macros;
mod permission;
mod role;
mod surface;

pub use permission::{is_valid_permission, permission_description, Permission, PermissionCategory};
pub use role::{AsRole, Role};
pub use surface::{ActionId, FeatureId, PageId};
