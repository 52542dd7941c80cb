//! Route Access Resolver
//!
//! Maps each role to its accessible route patterns and answers whether a
//! concrete path is reachable. Routes are declared independently of the
//! role's grant set; holding a page permission does not open a route.

use std::collections::BTreeMap;

use tracing::debug;

use super::pattern::RoutePattern;
use crate::catalog::Role;
use crate::error::UnknownRoleError;

/// Per-role route patterns, total over the Role Catalog once validated
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeMap<Role, Vec<RoutePattern>>,
}

impl RouteTable {
    /// Build from already-parsed patterns
    pub(crate) fn new(routes: BTreeMap<Role, Vec<RoutePattern>>) -> Self {
        Self { routes }
    }

    /// Patterns declared for `role`, in declaration order
    pub fn patterns(&self, role: Role) -> Result<&[RoutePattern], UnknownRoleError> {
        self.routes
            .get(&role)
            .map(Vec::as_slice)
            .ok_or_else(|| UnknownRoleError::new(role.as_str()))
    }

    /// Whether `path` matches any of `role`'s patterns.
    ///
    /// Short-circuits on the first matching pattern. The path is compared
    /// verbatim: no trailing-slash, case or percent-encoding normalization.
    pub fn can_access(&self, role: Role, path: &str) -> Result<bool, UnknownRoleError> {
        let allowed = self
            .patterns(role)?
            .iter()
            .any(|pattern| pattern.matches(path));

        if !allowed {
            debug!(role = %role, path, "route not accessible");
        }

        Ok(allowed)
    }

    /// The first of `role`'s patterns matching `path`
    pub fn matching_pattern(&self, role: Role, path: &str) -> Result<Option<&RoutePattern>, UnknownRoleError> {
        Ok(self.patterns(role)?.iter().find(|pattern| pattern.matches(path)))
    }

    /// Total number of declared patterns across all roles
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    /// Whether no patterns are declared
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
