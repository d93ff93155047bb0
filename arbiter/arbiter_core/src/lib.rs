//! # Arbiter Core
//!
//! `arbiter_core` provides the building blocks shared by the Arbiter
//! access-control engine: the permission triple, the tri-state access
//! decision, error types and configuration.
//!
//! ## Crate Structure
//!
//! - **error**: Error types for all Arbiter components
//! - **types**: Permissions, decisions, assertion parameters, node kinds
//! - **utils**: Configuration loading and logging setup

pub mod error;
pub mod types;
pub mod utils;

// Re-export key types for convenience
pub use error::{ConfigError, Error, RegistryError, Result};
pub use types::{AccessCheck, NodeKind, Params, Permission, WILDCARD_OPERATION};
pub use utils::{init_logging, Config, LogLevel, LoggingConfig, RegistryConfig};
