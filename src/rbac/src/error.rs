//! Error types for the access-control registry

use thiserror::Error;

/// A role identifier outside the closed Role Catalog.
///
/// Raised by every entry point that accepts a role, so a role that slipped
/// past bootstrap is reported the same way wherever it shows up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role: {role}")]
pub struct UnknownRoleError {
    /// The rejected identifier, verbatim
    pub role: String,
}

impl UnknownRoleError {
    /// Create an error for the given identifier
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

/// Route pattern syntax errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Empty pattern string
    #[error("Route pattern cannot be empty")]
    Empty,

    /// Pattern does not start with '/'
    #[error("Route pattern must start with '/': '{0}'")]
    MissingLeadingSlash(String),

    /// Pattern contains an empty segment (e.g. `//` or a trailing slash)
    #[error("Route pattern has an empty segment: '{0}'")]
    EmptySegment(String),

    /// Segment mixes a placeholder with literal text, or the placeholder is unnamed
    #[error("Malformed placeholder segment: '{0}'")]
    MalformedPlaceholder(String),

    /// Pattern is made only of placeholders
    #[error("Route pattern has no literal segment: '{0}'")]
    NoLiteralSegment(String),

    /// The same placeholder name appears twice
    #[error("Duplicate placeholder '{name}' in '{pattern}'")]
    DuplicatePlaceholder {
        /// Offending pattern
        pattern: String,
        /// Repeated placeholder name
        name: String,
    },
}

/// Startup validation failures.
///
/// A registry that fails validation is never constructed; callers abort
/// startup instead of serving with a partially valid map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// A table is keyed by an identifier outside the Role Catalog
    #[error("Table '{table}' references unknown role '{role}'")]
    UnknownRole {
        /// Table name (grants, routes, menus, dashboards)
        table: &'static str,
        /// Offending identifier
        role: String,
    },

    /// A total table has no entry for a catalog role
    #[error("Table '{table}' has no entry for role '{role}'")]
    MissingRole {
        /// Table name
        table: &'static str,
        /// Catalog role without an entry
        role: String,
    },

    /// A role was granted nothing
    #[error("Role '{0}' has an empty grant set")]
    EmptyGrant(String),

    /// A grant set names a permission outside the Permission Catalog
    #[error("Role '{role}' is granted unknown permission '{permission}'")]
    UnknownPermission {
        /// Role holding the grant
        role: String,
        /// Offending identifier
        permission: String,
    },

    /// A route table entry is not a valid pattern
    #[error("Role '{role}' has invalid route pattern: {source}")]
    InvalidRoutePattern {
        /// Role owning the pattern
        role: String,
        /// Underlying syntax error
        #[source]
        source: PatternError,
    },

    /// A menu section audience names a role outside the catalog
    #[error("Menu section '{section}' has unknown audience role '{role}'")]
    UnknownMenuAudience {
        /// Section name
        section: String,
        /// Offending identifier
        role: String,
    },

    /// A menu item restriction names a role that cannot see its section
    #[error("Menu item '{label}' is restricted to '{role}', which is not in its section's audience")]
    InvalidMenuRestriction {
        /// Item label
        label: String,
        /// Offending identifier
        role: String,
    },

    /// A menu item carries an empty restriction list, hiding it from everyone
    #[error("Menu item '{0}' is restricted to no role")]
    EmptyMenuRestriction(String),

    /// The dashboard table lacks the Taxpayer entry used as fallback
    #[error("Dashboard table has no fallback entry for role '{0}'")]
    MissingDashboardFallback(String),

    /// The fallback dashboard entry lists no metric
    #[error("Dashboard fallback entry for role '{0}' is empty")]
    EmptyDashboardFallback(String),
}

/// Umbrella error for registry operations
#[derive(Debug, Error)]
pub enum RbacError {
    /// Unknown role supplied by a caller
    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),

    /// Startup validation failure
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// Declarative definition could not be parsed
    #[error("Invalid registry definition: {0}")]
    Definition(#[from] serde_json::Error),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RbacError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_message() {
        let err = UnknownRoleError::new("GHOST");
        assert_eq!(err.to_string(), "Unknown role: GHOST");
    }

    #[test]
    fn test_integrity_error_keeps_pattern_source() {
        use std::error::Error as _;

        let err = IntegrityError::InvalidRoutePattern {
            role: "TAXPAYER".to_string(),
            source: PatternError::Empty,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("TAXPAYER"));
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: RbacError = UnknownRoleError::new("GHOST").into();
        assert!(matches!(err, RbacError::UnknownRole(_)));
        assert_eq!(err.to_string(), "Unknown role: GHOST");
    }
}
