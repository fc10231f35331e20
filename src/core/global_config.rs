//! Global configuration management
//!
//! Reads settings from `config.toml` in the config directory. Global
//! settings supply machine-wide defaults (which javac to run, how long to
//! let it run) that a project manifest may override.

use crate::infra::dirs::PickupDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for pickup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Compiler defaults
    #[serde(default)]
    pub compiler: CompilerDefaults,
}

/// Machine-wide compiler defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompilerDefaults {
    /// javac binary to use when the manifest does not name one
    pub javac: Option<String>,

    /// Watchdog timeout in seconds when the manifest does not set one
    pub timeout_secs: Option<u64>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns `GlobalConfigError::ParseError` if the config file exists but
    /// contains invalid TOML.
    pub fn load(dirs: &PickupDirs) -> Result<Self, GlobalConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Effective javac binary
    ///
    /// Returns the configured binary if set, otherwise the default.
    #[must_use]
    pub fn javac(&self) -> &str {
        self.compiler
            .javac
            .as_deref()
            .unwrap_or(crate::config::defaults::DEFAULT_JAVAC)
    }
}
