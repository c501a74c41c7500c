use std::path::PathBuf;

/// Configuration loading errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("invalid config: {message}")]
    Invalid { message: String },
}
