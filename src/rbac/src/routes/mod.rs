//! Route-based access control
//!
//! Provides path templates with single-segment placeholders and the
//! per-role route table that decides whether a path is navigable.
//!
//! # Examples
//!
//! ```
//! use itas_rbac::routes::RoutePattern;
//!
//! let pattern = RoutePattern::new("/admin/analytics/{id}").unwrap();
//! assert!(pattern.matches("/admin/analytics/7"));
//! assert!(!pattern.matches("/admin/analytics"));
//! ```

mod pattern;
mod resolver;

pub use pattern::{PatternResult, RoutePattern};
pub use resolver::RouteTable;
