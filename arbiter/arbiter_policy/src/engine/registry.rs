//! Permission registry.
//!
//! The registry owns the role and resource hierarchies, the allow and deny
//! rule sets, and the set of denial-only roles. Registration takes
//! `&mut self`; queries (see the resolver) take `&self`, so a fully built
//! registry can be shared between threads for read-only use.

use arbiter_core::error::{RegistryError, Result};
use arbiter_core::types::{NodeKind, Permission};
use arbiter_core::utils::RegistryConfig;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::model::{Assertion, Effect};
use crate::store::{Hierarchy, RuleSet};

/// The access-control registry.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Behavioral switches.
    pub(super) config: RegistryConfig,

    /// Role hierarchy, with a child index for denial-only invalidation.
    pub(super) roles: Hierarchy,

    /// Resource hierarchy.
    pub(super) resources: Hierarchy,

    /// Allow rules.
    pub(super) allowed: RuleSet,

    /// Deny rules.
    pub(super) denied: RuleSet,

    /// Roles with no path to any allow rule.
    pub(super) denial_only: HashSet<String>,
}

impl Registry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            roles: Hierarchy::with_child_index(NodeKind::Role),
            resources: Hierarchy::new(NodeKind::Resource),
            allowed: RuleSet::new(Effect::Allow),
            denied: RuleSet::new(Effect::Deny),
            denial_only: HashSet::new(),
        }
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a role, or append parents to an existing one.
    ///
    /// A new role is denial-only when every parent is denial-only (always
    /// the case without parents). An existing role keeps its flag unless a
    /// newly added parent is not denial-only, in which case the role and
    /// all its descendants lose it.
    ///
    /// # Errors
    ///
    /// * `EmptyName` if `role` is empty.
    /// * `CyclicHierarchy` if cycles are rejected and a parent edge would close one.
    /// * `UnknownParent` if parents must be registered and one is not.
    pub fn add_role<S: AsRef<str>>(&mut self, role: &str, parents: &[S]) -> Result<()> {
        validate_registration(&self.config, &self.roles, role, parents)?;

        let parents_denial_only = parents
            .iter()
            .all(|parent| self.denial_only.contains(parent.as_ref()));

        let is_new = self.roles.add_node(role, parents);
        if is_new {
            if parents_denial_only {
                self.denial_only.insert(role.to_string());
            }
        } else if !parents_denial_only {
            self.clear_denial_only(role);
        }

        debug!(
            role,
            parents = parents.len(),
            is_new,
            denial_only = self.is_denial_only(role),
            "Registered role"
        );

        Ok(())
    }

    /// Register a resource, or append parents to an existing one.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::add_role`].
    pub fn add_resource<S: AsRef<str>>(&mut self, resource: &str, parents: &[S]) -> Result<()> {
        validate_registration(&self.config, &self.resources, resource, parents)?;

        let is_new = self.resources.add_node(resource, parents);
        debug!(
            resource,
            parents = parents.len(),
            is_new,
            "Registered resource"
        );

        Ok(())
    }

    /// Allow `role` and its descendants to perform `operation` on
    /// `resource` and its descendants.
    ///
    /// An empty `operation` covers every operation.
    pub fn allow(&mut self, role: &str, operation: &str, resource: &str) -> Result<()> {
        self.insert_rule(Effect::Allow, role, operation, resource, None)
    }

    /// Like [`Registry::allow`], but the rule only applies while `assertion`
    /// holds.
    pub fn allow_when<A>(
        &mut self,
        role: &str,
        operation: &str,
        resource: &str,
        assertion: A,
    ) -> Result<()>
    where
        A: Assertion + 'static,
    {
        self.insert_rule(Effect::Allow, role, operation, resource, Some(Arc::new(assertion)))
    }

    /// Deny `role` and its descendants from performing `operation` on
    /// `resource` and its descendants.
    pub fn deny(&mut self, role: &str, operation: &str, resource: &str) -> Result<()> {
        self.insert_rule(Effect::Deny, role, operation, resource, None)
    }

    /// Like [`Registry::deny`], but the rule only applies while `assertion`
    /// holds.
    pub fn deny_when<A>(
        &mut self,
        role: &str,
        operation: &str,
        resource: &str,
        assertion: A,
    ) -> Result<()>
    where
        A: Assertion + 'static,
    {
        self.insert_rule(Effect::Deny, role, operation, resource, Some(Arc::new(assertion)))
    }

    fn insert_rule(
        &mut self,
        effect: Effect,
        role: &str,
        operation: &str,
        resource: &str,
        assertion: Option<Arc<dyn Assertion>>,
    ) -> Result<()> {
        self.ensure_role(role)?;
        self.ensure_resource(resource)?;

        let permission = Permission::new(role, operation, resource);
        let conditional = assertion.is_some();

        let replaced = match effect {
            Effect::Allow => {
                let replaced = self.allowed.put(permission.clone(), assertion);
                self.clear_denial_only(role);
                replaced
            }
            Effect::Deny => self.denied.put(permission.clone(), assertion),
        };

        debug!(
            %effect,
            %permission,
            conditional,
            replaced = replaced.is_some(),
            "Registered rule"
        );

        Ok(())
    }

    /// Clear the denial-only flag from `role` and every descendant.
    fn clear_denial_only(&mut self, role: &str) {
        for name in self.roles.descendants(role) {
            self.denial_only.remove(name);
        }
    }

    pub(super) fn ensure_role(&self, role: &str) -> Result<()> {
        if role.is_empty() || !self.roles.contains(role) {
            return Err(RegistryError::UnknownRole(role.to_string()).into());
        }
        Ok(())
    }

    pub(super) fn ensure_resource(&self, resource: &str) -> Result<()> {
        if resource.is_empty() || !self.resources.contains(resource) {
            return Err(RegistryError::UnknownResource(resource.to_string()).into());
        }
        Ok(())
    }

    /// Whether `role` has been registered.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Whether `resource` has been registered.
    pub fn has_resource(&self, resource: &str) -> bool {
        self.resources.contains(resource)
    }

    /// Whether `role` currently has no path to any allow rule.
    ///
    /// Unregistered roles are never denial-only.
    pub fn is_denial_only(&self, role: &str) -> bool {
        self.denial_only.contains(role)
    }

    /// The role hierarchy.
    pub fn role_hierarchy(&self) -> &Hierarchy {
        &self.roles
    }

    /// The resource hierarchy.
    pub fn resource_hierarchy(&self) -> &Hierarchy {
        &self.resources
    }

    /// The allow rules.
    pub fn allow_rules(&self) -> &RuleSet {
        &self.allowed
    }

    /// The deny rules.
    pub fn deny_rules(&self) -> &RuleSet {
        &self.denied
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a registration against `graph` before anything is mutated.
fn validate_registration<S: AsRef<str>>(
    config: &RegistryConfig,
    graph: &Hierarchy,
    node: &str,
    parents: &[S],
) -> Result<()> {
    let kind = graph.kind();

    if node.is_empty() {
        return Err(RegistryError::EmptyName(kind).into());
    }

    for parent in parents {
        let parent = parent.as_ref();

        if config.reject_cycles && graph.would_create_cycle(node, parent) {
            return Err(RegistryError::CyclicHierarchy {
                kind,
                node: node.to_string(),
                parent: parent.to_string(),
            }
            .into());
        }

        if !graph.contains(parent) && config.require_registered_parents {
            return Err(RegistryError::UnknownParent {
                kind,
                node: node.to_string(),
                parent: parent.to_string(),
            }
            .into());
        }
    }

    for parent in parents {
        let parent = parent.as_ref();
        if !graph.contains(parent) {
            warn!(%kind, node, parent, "Parent is not registered");
        }
    }

    Ok(())
}
