//! Error taxonomy, one enum per subsystem plus the workspace umbrella.

mod config_error;
mod load_error;
mod pricing_error;
mod query_error;

pub use config_error::ConfigError;
pub use load_error::LoadError;
pub use pricing_error::PricingError;
pub use query_error::QueryError;

/// Umbrella error for callers that cross subsystem boundaries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForecourtError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type ForecourtResult<T> = Result<T, ForecourtError>;
