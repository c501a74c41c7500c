use serde::{Deserialize, Serialize};

use super::defaults;

/// Dataset source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetsConfig {
    /// Path to the vehicle catalog CSV.
    pub catalog_path: String,
    /// Path to the order-log CSV.
    pub orders_path: String,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            catalog_path: defaults::DEFAULT_CATALOG_PATH.to_string(),
            orders_path: defaults::DEFAULT_ORDERS_PATH.to_string(),
        }
    }
}
