//! Shared data models for the dealership engine.
//!
//! Everything here is plain data: catalog rows, sidebar state, the add-on
//! menu, order-log rows, and aggregation outputs. The engines that operate
//! on these live in the sibling crates.

mod add_on;
mod criteria;
mod order;
mod range;
mod showroom;
mod top_selling;
mod vehicle;

pub use add_on::AddOn;
pub use criteria::{FilterCriteria, Selection};
pub use order::Order;
pub use range::ClosedRange;
pub use showroom::{Showroom, SHOWROOMS};
pub use top_selling::TopSellingEntry;
pub use vehicle::{AttrField, Vehicle};
