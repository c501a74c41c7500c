/// Read-path errors: bad user-supplied windows and empty datasets.
///
/// Zero matches from a filter is never an error, only these are.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("dataset {name} has no rows")]
    EmptyDataset { name: String },

    #[error("inverted range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },
}

impl QueryError {
    pub fn empty_dataset(name: impl Into<String>) -> QueryError {
        QueryError::EmptyDataset { name: name.into() }
    }

    /// Builds the rejection for a `min > max` window, rendering both
    /// endpoints for the message.
    pub fn inverted_range(min: impl std::fmt::Display, max: impl std::fmt::Display) -> QueryError {
        QueryError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
