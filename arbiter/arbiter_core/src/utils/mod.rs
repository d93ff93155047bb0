//! Utility functions and types.
//!
//! Configuration and logging helpers shared by the Arbiter crates.

pub mod config;
pub mod logging;

pub use config::{Config, LoggingConfig, RegistryConfig};
pub use logging::{init_logging, LogLevel};
