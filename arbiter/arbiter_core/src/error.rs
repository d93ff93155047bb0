//! Error types for the Arbiter access-control engine.
//!
//! Errors are organized by subsystem. The root error type, `Error`, wraps
//! the subsystem-specific errors so callers can handle everything
//! uniformly at the top level.

use crate::types::NodeKind;
use thiserror::Error;

/// Root error type for Arbiter.
#[derive(Debug, Error)]
pub enum Error {
    /// Registry registration and query errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the permission registry.
///
/// Every variant is returned before the registry is mutated or any
/// rule candidate is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Role is empty or was never registered
    #[error("Unknown role `{0}`: roles must be non-empty and registered")]
    UnknownRole(String),

    /// Resource is empty or was never registered
    #[error("Unknown resource `{0}`: resources must be non-empty and registered")]
    UnknownResource(String),

    /// A role or resource was registered with an empty name
    #[error("{0} name cannot be empty")]
    EmptyName(NodeKind),

    /// A parent was named that has not been registered itself
    #[error("Parent {kind} `{parent}` of `{node}` is not registered")]
    UnknownParent {
        /// Which hierarchy the edge belongs to
        kind: NodeKind,

        /// The node being registered
        node: String,

        /// The missing parent
        parent: String,
    },

    /// Recording the parent edge would close a cycle
    #[error("Making `{parent}` a parent of {kind} `{node}` would create a cycle")]
    CyclicHierarchy {
        /// Which hierarchy the edge belongs to
        kind: NodeKind,

        /// The node being registered
        node: String,

        /// The parent that closes the cycle
        parent: String,
    },
}

/// Errors related to loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    /// The configuration file is not valid TOML for the expected shape
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// The configuration is well-formed but not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type used throughout Arbiter.
pub type Result<T> = std::result::Result<T, Error>;
