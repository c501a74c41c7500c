//! The per-row match predicate.

use forecourt_core::models::{FilterCriteria, Vehicle};

/// Whether one row passes every condition of the criteria: each categorical
/// selection admits the row's cell value, and both numeric columns fall
/// inside their inclusive ranges.
///
/// A concrete pick on an optional column never matches a blank cell; the
/// wildcard admits everything.
pub fn matches(vehicle: &Vehicle, criteria: &FilterCriteria) -> bool {
    criteria
        .selections()
        .iter()
        .all(|(field, selection)| selection.admits_opt(field.value_of(vehicle)))
        && criteria.year_range.contains(vehicle.year)
        && criteria.price_range.contains(vehicle.standard_price)
}
