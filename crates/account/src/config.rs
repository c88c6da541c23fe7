//! Account configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use tally_core::{DEFAULT_MONEY_SCALE, MAX_MONEY_SCALE};
use tally_ports::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Fractional digits kept on cash amounts; extra digits are truncated
    #[serde(default = "default_money_scale")]
    pub money_scale: u32,
}

fn default_money_scale() -> u32 {
    DEFAULT_MONEY_SCALE
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            money_scale: default_money_scale(),
        }
    }
}

impl AccountConfig {
    pub fn with_money_scale(money_scale: u32) -> Self {
        Self { money_scale }
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.money_scale > MAX_MONEY_SCALE {
            return Err(ConfigError::InvalidScale(self.money_scale));
        }
        Ok(())
    }
}
