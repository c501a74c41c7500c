//! # forecourt-catalog
//!
//! The vehicle catalog store: CSV ingestion with header and row validation,
//! process-wide memoized loading, distinct-value lookups for the filter
//! sidebar, and numeric bounds for seeding the range sliders.

pub mod loader;
pub mod store;

mod cache;

pub use store::Catalog;
