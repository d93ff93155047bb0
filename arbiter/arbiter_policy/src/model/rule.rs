//! Rule model.
//!
//! A rule binds a permission triple to an assertion that decides, at
//! resolution time, whether the rule actually applies.

use arbiter_core::types::{Params, Permission};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The effect of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Grant access.
    Allow,

    /// Refuse access.
    Deny,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "Allow"),
            Self::Deny => write!(f, "Deny"),
        }
    }
}

/// A runtime predicate gating a rule.
///
/// Assertions receive the role, operation and resource that were actually
/// requested, not the ancestor triple the rule was registered under,
/// together with the caller's parameters. They run inline on every
/// resolution and their results are never cached.
///
/// Any `Fn(&str, &str, &str, &Params) -> bool` closure that is
/// `Send + Sync` is an assertion.
pub trait Assertion: Send + Sync {
    /// Decide whether the rule applies to this request.
    fn holds(&self, role: &str, operation: &str, resource: &str, params: &Params) -> bool;
}

impl<F> Assertion for F
where
    F: Fn(&str, &str, &str, &Params) -> bool + Send + Sync,
{
    fn holds(&self, role: &str, operation: &str, resource: &str, params: &Params) -> bool {
        self(role, operation, resource, params)
    }
}

/// The assertion used by rules registered without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconditional;

impl Assertion for Unconditional {
    fn holds(&self, _role: &str, _operation: &str, _resource: &str, _params: &Params) -> bool {
        true
    }
}

/// Shared default assertion. Every unconditional rule evaluates through it.
pub static UNCONDITIONAL: Unconditional = Unconditional;

/// A rule: a permission and the assertion bound to it.
#[derive(Clone)]
pub struct Rule {
    permission: Permission,
    assertion: Option<Arc<dyn Assertion>>,
}

impl Rule {
    /// Create a new rule. `None` makes the rule unconditional.
    pub fn new(permission: Permission, assertion: Option<Arc<dyn Assertion>>) -> Self {
        Self {
            permission,
            assertion,
        }
    }

    /// The permission this rule is registered under.
    pub fn permission(&self) -> &Permission {
        &self.permission
    }

    /// Whether this rule carries its own assertion.
    pub fn is_conditional(&self) -> bool {
        self.assertion.is_some()
    }

    /// The assertion gating this rule.
    pub fn assertion(&self) -> &dyn Assertion {
        match &self.assertion {
            Some(assertion) => assertion.as_ref(),
            None => &UNCONDITIONAL,
        }
    }

    /// Evaluate the rule's assertion for a request.
    pub fn applies(&self, role: &str, operation: &str, resource: &str, params: &Params) -> bool {
        self.assertion().holds(role, operation, resource, params)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("permission", &self.permission)
            .field("conditional", &self.is_conditional())
            .finish()
    }
}
