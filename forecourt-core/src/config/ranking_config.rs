use serde::{Deserialize, Serialize};

use super::defaults;

/// Top-seller ranking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// How many entries a ranking query returns at most.
    pub top_limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_limit: defaults::DEFAULT_TOP_SELLING_LIMIT,
        }
    }
}
