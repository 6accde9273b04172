pub mod discovery_config;
pub mod logging_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

pub use discovery_config::DiscoveryConfig;
pub use logging_config::LoggingConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UrmConfig {
    pub discovery: DiscoveryConfig,
    pub logging: LoggingConfig,
}

impl UrmConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Load `urm.toml` from `dir`. A missing file yields the defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!(dir = %dir.display(), "no urm.toml found, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.discovery.threads == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "discovery.threads".to_string(),
                message: "must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}
