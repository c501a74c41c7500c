//! # forecourt-filter
//!
//! The filter engine: applies a user's criteria to the catalog as one
//! conjunction of equality and range predicates, preserving catalog row
//! order. Inverted ranges are rejected before any row is visited; zero
//! matches is a valid empty result, never an error.

pub mod engine;
pub mod predicate;

pub use engine::FilterEngine;
