//! Global dayblock configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DayblockError, DayblockResult};

fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("dayblock").join("blocked_dates.json"))
        .unwrap_or_else(|| PathBuf::from("blocked_dates.json"))
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

/// Configuration at ~/.config/dayblock/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayblockConfig {
    /// Where the blocked-dates file lives.
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_path: PathBuf,
}

impl Default for DayblockConfig {
    fn default() -> Self {
        DayblockConfig {
            data_path: default_data_path(),
        }
    }
}

impl DayblockConfig {
    pub fn config_path() -> DayblockResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayblockError::Config("Could not determine config directory".into()))?
            .join("dayblock");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults if it doesn't exist.
    pub fn load() -> DayblockResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        toml::from_str(&content).map_err(|e| DayblockError::Config(e.to_string()))
    }

    /// Save the current config to ~/.config/dayblock/config.toml
    pub fn save(&self) -> DayblockResult<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| DayblockError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| DayblockError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
