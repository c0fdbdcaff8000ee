//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads engine configuration from YAML.
///
/// The file is a flat mapping; every key is optional and falls back to the
/// value in [`EngineConfig::default`]:
///
/// ```text
/// earliest_eligible_date: 2023-01-01
/// minimum_wage: 877803
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/severance.yaml")?;
/// println!("Earliest eligible date: {}", loader.config().earliest_eligible_date);
/// # Ok::<(), severance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML or invalid values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    ///
    /// An empty document yields the default configuration.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str::<EngineConfig>(content).map_err(|e| {
            EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
