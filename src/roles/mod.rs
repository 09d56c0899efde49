//! Role registry - identifier to prompt template lookup
//!
//! The built-in table is process-wide immutable configuration: it is loaded
//! once on first use and never mutated afterwards.

mod templates;

pub use templates::{ids, TEMPLATES};

use std::collections::HashMap;
use std::sync::OnceLock;

/// A registered role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: &'static str,
    pub template: &'static str,
}

/// Role registry - read-only after construction
#[derive(Debug)]
pub struct RoleRegistry {
    roles: HashMap<&'static str, Role>,
    order: Vec<&'static str>,
}

static BUILTIN: OnceLock<RoleRegistry> = OnceLock::new();

impl RoleRegistry {
    /// The built-in registry, initialised on first access.
    pub fn builtin() -> &'static RoleRegistry {
        BUILTIN.get_or_init(|| Self::from_table(TEMPLATES))
    }

    /// Build a registry from an identifier → template table.
    ///
    /// Later duplicates replace earlier ones.
    pub fn from_table(table: &[(&'static str, &'static str)]) -> Self {
        let mut registry = Self {
            roles: HashMap::with_capacity(table.len()),
            order: Vec::with_capacity(table.len()),
        };

        for &(id, template) in table {
            if registry
                .roles
                .insert(id, Role { id, template })
                .is_none()
            {
                registry.order.push(id);
            }
        }

        registry
    }

    /// Check that a role is non-empty, registered, and has a template.
    pub fn validate(&self, role: &str) -> bool {
        if role.is_empty() {
            return false;
        }
        self.roles
            .get(role)
            .is_some_and(|r| !r.template.trim().is_empty())
    }

    /// Template text for a role, if registered.
    pub fn template_for(&self, role: &str) -> Option<&'static str> {
        self.roles.get(role).map(|r| r.template)
    }

    /// Get a role by identifier
    pub fn get(&self, role: &str) -> Option<&Role> {
        self.roles.get(role)
    }

    /// Role identifiers in registration order
    pub fn roles(&self) -> &[&'static str] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Validate a role against the built-in registry.
pub fn validate_role(role: &str) -> bool {
    RoleRegistry::builtin().validate(role)
}

/// Look up a template in the built-in registry.
pub fn template_for(role: &str) -> Option<&'static str> {
    RoleRegistry::builtin().template_for(role)
}
