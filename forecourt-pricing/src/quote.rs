//! Quote building: resolve keys, collapse duplicates, sum exactly.

use std::collections::BTreeSet;

use serde::Serialize;

use forecourt_core::errors::PricingError;
use forecourt_core::models::{AddOn, Vehicle};

/// The priced breakdown for one configured vehicle: base price, the
/// resolved extras in menu order, their subtotal, and the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub standard_price: i64,
    pub add_ons: Vec<AddOn>,
    pub add_ons_total: i64,
    pub total: i64,
}

/// Resolve every key and price the configuration. Duplicate keys count
/// once; an unknown key fails the whole quote rather than pricing at zero.
pub fn quote<I>(vehicle: &Vehicle, add_on_keys: I) -> Result<Quote, PricingError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut selected = BTreeSet::new();
    for key in add_on_keys {
        selected.insert(AddOn::from_key(key.as_ref())?);
    }

    let add_ons: Vec<AddOn> = selected.into_iter().collect();
    let add_ons_total: i64 = add_ons.iter().map(|a| a.price()).sum();

    Ok(Quote {
        standard_price: vehicle.standard_price,
        add_ons,
        add_ons_total,
        total: vehicle.standard_price + add_ons_total,
    })
}

/// The grand total alone. Pure; invariant to key order and duplication.
pub fn compute_total<I>(vehicle: &Vehicle, add_on_keys: I) -> Result<i64, PricingError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    quote(vehicle, add_on_keys).map(|q| q.total)
}
