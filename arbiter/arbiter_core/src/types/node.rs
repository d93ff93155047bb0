//! Hierarchy node kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two hierarchies a node lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A role in the role hierarchy.
    Role,

    /// A resource in the resource hierarchy.
    Resource,
}

impl NodeKind {
    /// Get the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Resource => "resource",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
