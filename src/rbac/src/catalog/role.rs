//! Role Catalog

use std::str::FromStr;

use super::macros::string_catalog;
use crate::error::UnknownRoleError;

string_catalog! {
    /// The closed set of platform roles.
    ///
    /// Exactly one role is active per authenticated session.
    pub enum Role {
        /// External user accessing tax education
        Taxpayer = "TAXPAYER",
        /// Ministry of Revenue staff (internal learner)
        MorStaff = "MOR_STAFF",
        /// Manages educational content and resources
        ContentAdmin = "CONTENT_ADMIN",
        /// Manages courses and webinars
        TrainingAdmin = "TRAINING_ADMIN",
        /// Handles notifications and communications
        CommOfficer = "COMM_OFFICER",
        /// Views analytics and reports
        Manager = "MANAGER",
        /// Full system administration
        SystemAdmin = "SYSTEM_ADMIN",
        /// System auditing and compliance
        Auditor = "AUDITOR",
    }
}

impl Role {
    /// Roles that operate the platform rather than consume it
    pub const ADMINISTRATIVE: &'static [Role] = &[
        Role::ContentAdmin,
        Role::TrainingAdmin,
        Role::CommOfficer,
        Role::Manager,
        Role::SystemAdmin,
        Role::Auditor,
    ];

    /// Roles held by Ministry personnel
    pub const INTERNAL: &'static [Role] = &[
        Role::MorStaff,
        Role::ContentAdmin,
        Role::TrainingAdmin,
        Role::CommOfficer,
        Role::Manager,
        Role::SystemAdmin,
        Role::Auditor,
    ];

    /// Whether this role is in [`Role::ADMINISTRATIVE`]
    pub fn is_administrative(&self) -> bool {
        Self::ADMINISTRATIVE.contains(self)
    }

    /// Whether this role is in [`Role::INTERNAL`]
    pub fn is_internal(&self) -> bool {
        Self::INTERNAL.contains(self)
    }

    /// Human-readable name
    pub const fn display_name(&self) -> &'static str {
        match self {
            Role::Taxpayer => "Taxpayer",
            Role::MorStaff => "MOR Staff",
            Role::ContentAdmin => "Content Administrator",
            Role::TrainingAdmin => "Training Administrator",
            Role::CommOfficer => "Communication Officer",
            Role::Manager => "Manager",
            Role::SystemAdmin => "System Administrator",
            Role::Auditor => "Auditor",
        }
    }

    /// One-line description of the role's responsibilities
    pub const fn description(&self) -> &'static str {
        match self {
            Role::Taxpayer => "Individual taxpayers who can access educational resources and courses",
            Role::MorStaff => "Internal Ministry of Revenue staff with access to internal training",
            Role::ContentAdmin => "Manages educational content, resources, and materials",
            Role::TrainingAdmin => "Schedules and manages webinars and training sessions",
            Role::CommOfficer => "Sends notifications and communications to users",
            Role::Manager => "Views analytics and generates reports",
            Role::SystemAdmin => "Manages system configuration, users, and roles",
            Role::Auditor => "Audits system usage and compliance",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_id(s).ok_or_else(|| UnknownRoleError::new(s))
    }
}

/// Anything that can name a role: the typed [`Role`] or a raw identifier.
///
/// Raw identifiers come from outside the type system (token claims, request
/// parameters) and are checked against the catalog on every call.
pub trait AsRole {
    /// Resolve to a catalog role
    fn as_role(&self) -> Result<Role, UnknownRoleError>;
}

impl AsRole for Role {
    fn as_role(&self) -> Result<Role, UnknownRoleError> {
        Ok(*self)
    }
}

impl AsRole for &Role {
    fn as_role(&self) -> Result<Role, UnknownRoleError> {
        Ok(**self)
    }
}

impl AsRole for str {
    fn as_role(&self) -> Result<Role, UnknownRoleError> {
        self.parse()
    }
}

impl AsRole for &str {
    fn as_role(&self) -> Result<Role, UnknownRoleError> {
        self.parse()
    }
}

impl AsRole for String {
    fn as_role(&self) -> Result<Role, UnknownRoleError> {
        self.parse()
    }
}

impl AsRole for &String {
    fn as_role(&self) -> Result<Role, UnknownRoleError> {
        self.parse()
    }
}
