//! Configuration for the Arbiter engine.
//!
//! The host application decides where configuration comes from. These
//! types only describe the registry's behavioral switches and logging
//! settings and know how to read them from TOML. Roles, resources and
//! rules are never part of configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::logging::LogLevel;
use crate::error::{ConfigError, Result};

/// Registry behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Reject parent edges that would close a cycle in a hierarchy
    #[serde(default = "default_reject_cycles")]
    pub reject_cycles: bool,

    /// Require parents to be registered before they are named
    #[serde(default)]
    pub require_registered_parents: bool,
}

fn default_reject_cycles() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            reject_cycles: default_reject_cycles(),
            require_registered_parents: false,
        }
    }
}

/// Logging output for hosts that use [`init_logging`](super::logging::init_logging).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to install a subscriber at all
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// Maximum level emitted
    #[serde(default)]
    pub level: LogLevel,

    /// Whether to include the event target (module path) in output
    #[serde(default)]
    pub with_target: bool,
}

fn default_logging_enabled() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            level: LogLevel::default(),
            with_target: false,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Registry configuration
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()).into())
    }

    /// Load configuration from a TOML file.
    ///
    /// With no path, or a path that does not exist, the defaults are
    /// returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("No configuration file specified, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            warn!(path = %path.display(), "Configuration file not found, using defaults");
            return Ok(Self::default());
        }

        info!(path = %path.display(), "Loading configuration");
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadFailed(format!("{}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Serialize this configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.registry.reject_cycles);
        assert!(!config.registry.require_registered_parents);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r#"
            [registry]
            reject_cycles = false
            require_registered_parents = true

            [logging]
            level = "warn"
            with_target = true
            "#,
        )
        .unwrap();

        assert!(!config.registry.reject_cycles);
        assert!(config.registry.require_registered_parents);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, LogLevel::Warning);
        assert!(config.logging.with_target);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[registry]\nrequire_registered_parents = true\n")
            .unwrap();
        assert!(config.registry.reject_cycles);
        assert!(config.registry.require_registered_parents);
        assert_eq!(config.logging, LoggingConfig::default());

        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_toml() {
        let result = Config::from_toml_str("[registry]\nreject_cycles = \"sometimes\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ParseFailed(_)))
        ));
    }

    #[test]
    fn test_load_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nenabled = false\nlevel = \"debug\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.registry, RegistryConfig::default());
    }

    #[test]
    fn test_load_missing_or_absent_path() {
        let config = Config::load(Some(Path::new("/nonexistent/arbiter.toml"))).unwrap();
        assert_eq!(config, Config::default());

        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.registry.require_registered_parents = true;
        config.logging.level = LogLevel::Trace;

        let serialized = config.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
