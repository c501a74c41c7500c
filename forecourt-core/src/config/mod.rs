//! Configuration structs with serde defaults and TOML loading.

pub mod defaults;

mod datasets_config;
mod forecourt_config;
mod ranking_config;

pub use datasets_config::DatasetsConfig;
pub use forecourt_config::ForecourtConfig;
pub use ranking_config::RankingConfig;
