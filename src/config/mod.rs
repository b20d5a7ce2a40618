// src/config/mod.rs
pub mod types;

pub use self::types::{AnalysisConfig, Config, SnapshotConfig};

use crate::error::{Result, StoreError};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "storelens.toml";

impl Config {
    /// Loads `storelens.toml` from the working directory, falling back to defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads a config file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parses and validates TOML content.
    ///
    /// # Errors
    /// Returns `Config` on malformed TOML or `InvalidInput` on rejected values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidInput` if a threshold cannot be satisfied.
    pub fn validate(&self) -> Result<()> {
        self.analysis.to_options().validate()
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    /// Returns error if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| StoreError::Config(e.to_string()))?;
        fs::write(path, content).map_err(|source| StoreError::Io {
            source,
            path: path.to_path_buf(),
        })
    }
}
