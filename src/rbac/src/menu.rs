//! Navigation menu catalog

use serde::{Deserialize, Serialize};

use crate::catalog::Role;

/// Presentation metadata for one navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display label
    pub label: String,

    /// Target route
    pub path: String,

    /// Icon reference understood by the renderer
    pub icon: String,

    /// Roles allowed to see the item; `None` means everyone in the section's audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
}

impl MenuItem {
    /// Create an unrestricted item
    pub fn new(label: impl Into<String>, path: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: icon.into(),
            roles: None,
        }
    }

    /// Restrict the item to the given roles
    pub fn restricted_to(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = Some(roles.into_iter().collect());
        self
    }

    /// Whether `role` may see this item, given it can see the containing section
    pub fn is_visible_to(&self, role: Role) -> bool {
        match &self.roles {
            None => true,
            Some(roles) => roles.contains(&role),
        }
    }
}

/// A menu shown to a fixed audience of roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    /// Section name (e.g. "taxpayer", "admin")
    pub name: String,

    /// Roles that see this section
    pub audience: Vec<Role>,

    /// Items in display order
    pub items: Vec<MenuItem>,
}

/// All declared menu sections
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    sections: Vec<MenuSection>,
}

impl MenuCatalog {
    /// Build from validated sections
    pub(crate) fn new(sections: Vec<MenuSection>) -> Self {
        Self { sections }
    }

    /// Declared sections, in order
    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    /// Items visible to `role`, across every section whose audience includes it
    pub fn items_for(&self, role: Role) -> Vec<MenuItem> {
        self.sections
            .iter()
            .filter(|section| section.audience.contains(&role))
            .flat_map(|section| section.items.iter())
            .filter(|item| item.is_visible_to(role))
            .cloned()
            .collect()
    }

    /// Total number of items across sections
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }
}
