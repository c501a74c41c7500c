//! # forecourt-core
//!
//! Foundation crate for the Forecourt dealership engine.
//! Defines the shared models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::ForecourtConfig;
pub use errors::{ForecourtError, ForecourtResult};
pub use models::{
    AddOn, AttrField, ClosedRange, FilterCriteria, Order, Selection, TopSellingEntry, Vehicle,
};
