use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DatasetsConfig, RankingConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Every field has a compiled default, so an empty TOML document is a valid
/// config. Unknown keys are ignored (forward-compatible).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ForecourtConfig {
    pub datasets: DatasetsConfig,
    pub ranking: RankingConfig,
}

impl ForecourtConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ForecourtConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Invalid {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ranking.top_limit == 0 {
            return Err(ConfigError::Invalid {
                message: "ranking.top_limit must be greater than 0".to_string(),
            });
        }
        if self.datasets.catalog_path.is_empty() {
            return Err(ConfigError::Invalid {
                message: "datasets.catalog_path must not be empty".to_string(),
            });
        }
        if self.datasets.orders_path.is_empty() {
            return Err(ConfigError::Invalid {
                message: "datasets.orders_path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
