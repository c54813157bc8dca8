//! Config loading and validation.

use super::model::Config;
use crate::error::{BakeryError, Result};
use std::path::Path;
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BakeryError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| BakeryError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `timeout_seconds` must be positive when set
    /// - `shell` must split into at least a program name when set
    pub fn validate(&self) -> Result<()> {
        if self.timeout_seconds == Some(0) {
            return Err(BakeryError::Config(
                "config validation failed: timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if let Some(shell) = &self.shell {
            let words = shell_words::split(shell).map_err(|e| {
                BakeryError::Config(format!(
                    "config validation failed: shell '{}' could not be parsed: {}",
                    shell, e
                ))
            })?;
            if words.is_empty() {
                return Err(BakeryError::Config(
                    "config validation failed: shell must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Timeout applied to each child process, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
