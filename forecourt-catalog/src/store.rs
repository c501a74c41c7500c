//! The in-memory vehicle table and its read API.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use forecourt_core::errors::{LoadError, QueryError};
use forecourt_core::models::{AttrField, ClosedRange, Vehicle};

use crate::{cache, loader};

/// The full vehicle dataset. Loaded once, immutable thereafter; all reads
/// are borrows against the loaded rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    /// Parse a catalog CSV straight from disk, bypassing the cache.
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
        loader::load_path(path)
    }

    /// Memoized entry point: the first call per path parses and caches, every
    /// later call returns the shared table without touching the file again.
    /// Failed loads are not cached; concurrent first loads coalesce.
    pub fn open(path: impl AsRef<Path>) -> Result<Arc<Catalog>, LoadError> {
        cache::open(path.as_ref())
    }

    /// In-memory construction for tests and embedders.
    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Catalog {
        Catalog { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Sorted unique non-null values of one filterable column, for the
    /// sidebar dropdowns. Byte-order lexicographic, deterministic.
    pub fn distinct_values(&self, field: AttrField) -> Vec<String> {
        let distinct: BTreeSet<&str> = self
            .vehicles
            .iter()
            .filter_map(|v| field.value_of(v))
            .collect();
        debug!(?field, count = distinct.len(), "distinct values computed");
        distinct.into_iter().map(str::to_string).collect()
    }

    /// Inclusive min/max of the model-year column, for seeding the year
    /// slider. Fails on a zero-row table.
    pub fn year_bounds(&self) -> Result<ClosedRange<i32>, QueryError> {
        bounds(self.vehicles.iter().map(|v| v.year))
    }

    /// Inclusive min/max of the list-price column, for seeding the price
    /// slider. Fails on a zero-row table.
    pub fn price_bounds(&self) -> Result<ClosedRange<i64>, QueryError> {
        bounds(self.vehicles.iter().map(|v| v.standard_price))
    }
}

fn bounds<T: PartialOrd + Copy>(
    mut values: impl Iterator<Item = T>,
) -> Result<ClosedRange<T>, QueryError> {
    let first = values
        .next()
        .ok_or_else(|| QueryError::empty_dataset("catalog"))?;
    let (min, max) = values.fold((first, first), |(lo, hi), v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    });
    Ok(ClosedRange::new(min, max))
}
