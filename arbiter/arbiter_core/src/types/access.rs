//! Access decision data types.
//!
//! This module defines the permission triple that keys every rule and the
//! tri-state outcome of an access resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The operation identifier that matches any operation.
///
/// The resolver generates it as a candidate alongside the requested
/// operation, so a rule registered for `""` applies to every operation.
pub const WILDCARD_OPERATION: &str = "";

/// Caller-supplied parameters passed through to assertions.
pub type Params = HashMap<String, serde_json::Value>;

/// A permission: the exact (role, operation, resource) triple a rule is
/// registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// The role identifier.
    pub role: String,

    /// The operation identifier, or [`WILDCARD_OPERATION`].
    pub operation: String,

    /// The resource identifier.
    pub resource: String,
}

impl Permission {
    /// Create a new permission triple.
    pub fn new(
        role: impl Into<String>,
        operation: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            operation: operation.into(),
            resource: resource.into(),
        }
    }

    /// Whether this permission covers every operation.
    pub fn is_wildcard(&self) -> bool {
        self.operation == WILDCARD_OPERATION
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operation = if self.is_wildcard() {
            "*"
        } else {
            self.operation.as_str()
        };
        write!(f, "{}:{}@{}", self.role, operation, self.resource)
    }
}

/// The outcome of an access resolution.
///
/// `Unknown` means no rule matched at all. The core never collapses this
/// into a boolean; that choice belongs to the host application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessCheck {
    /// No matching rule was found.
    #[default]
    Unknown,

    /// A matching allow rule applied and no deny rule did.
    Allowed,

    /// A matching deny rule applied.
    Denied,
}

impl AccessCheck {
    /// Whether access was explicitly allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Whether access was explicitly denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }

    /// Whether no rule matched.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The optional-boolean form: `None` when unknown.
    pub fn as_option(&self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::Allowed => Some(true),
            Self::Denied => Some(false),
        }
    }
}

impl From<Option<bool>> for AccessCheck {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Unknown,
            Some(true) => Self::Allowed,
            Some(false) => Self::Denied,
        }
    }
}

impl From<AccessCheck> for Option<bool> {
    fn from(check: AccessCheck) -> Self {
        check.as_option()
    }
}

impl fmt::Display for AccessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Allowed => write!(f, "Allowed"),
            Self::Denied => write!(f, "Denied"),
        }
    }
}
