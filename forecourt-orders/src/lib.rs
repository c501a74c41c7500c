//! # forecourt-orders
//!
//! The order aggregator: owns the historical order log, answers date-bound
//! queries for the chart's date pickers, and ranks top-selling cars over an
//! inclusive calendar-day window with deterministic tie-breaking.

pub mod loader;
pub mod ranking;
pub mod store;

mod cache;

pub use ranking::top_selling;
pub use store::OrderLog;
