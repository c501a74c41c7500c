//! FilterEngine: validates the criteria, then runs the row predicate over
//! the catalog in one stable pass.

use tracing::debug;

use forecourt_catalog::Catalog;
use forecourt_core::errors::QueryError;
use forecourt_core::models::{FilterCriteria, Vehicle};

use crate::predicate;

/// The filter engine. Borrows the loaded catalog; criteria arrive fresh per
/// interaction and the engine holds no other state.
pub struct FilterEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> FilterEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Select the rows matching the criteria, in catalog order.
    ///
    /// Inverted ranges are rejected up front with `InvalidRange`; an
    /// otherwise-unmatched criteria value just yields an empty result.
    pub fn apply(&self, criteria: &FilterCriteria) -> Result<Vec<Vehicle>, QueryError> {
        if criteria.year_range.is_inverted() {
            return Err(QueryError::inverted_range(
                criteria.year_range.min,
                criteria.year_range.max,
            ));
        }
        if criteria.price_range.is_inverted() {
            return Err(QueryError::inverted_range(
                criteria.price_range.min,
                criteria.price_range.max,
            ));
        }

        let matched: Vec<Vehicle> = self
            .catalog
            .vehicles()
            .iter()
            .filter(|v| predicate::matches(v, criteria))
            .cloned()
            .collect();

        debug!(
            matched = matched.len(),
            total = self.catalog.len(),
            "filter applied"
        );

        Ok(matched)
    }
}
