use std::path::PathBuf;

/// Dataset ingestion errors. Fatal to the affected store's startup.
///
/// `Clone` is required: the memoized load path hands failures back through a
/// shared cache, so foreign causes (io, csv) are captured as messages rather
/// than held as source errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("{} is missing required column {column:?}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{} line {line}: {message}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

impl LoadError {
    /// Wraps an io/csv open failure, keeping only its display text.
    pub fn unreadable(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> LoadError {
        LoadError::Unreadable {
            path: path.into(),
            message: cause.to_string(),
        }
    }

    pub fn missing_column(path: impl Into<PathBuf>, column: impl Into<String>) -> LoadError {
        LoadError::MissingColumn {
            path: path.into(),
            column: column.into(),
        }
    }

    pub fn malformed_row(
        path: impl Into<PathBuf>,
        line: u64,
        message: impl Into<String>,
    ) -> LoadError {
        LoadError::MalformedRow {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}
