//! # forecourt-pricing
//!
//! The pricing calculator: resolves selected add-on keys against the fixed
//! menu, collapses duplicates, and produces the exact integer breakdown the
//! detail pane displays. No discounts, tax, or currency conversion.

pub mod quote;

pub use quote::{compute_total, quote, Quote};
