//! Compiled-in configuration defaults.

pub use crate::constants::DEFAULT_TOP_SELLING_LIMIT;

/// Catalog CSV shipped with the original deployment.
pub const DEFAULT_CATALOG_PATH: &str = "car_data.csv";

/// Order-log CSV shipped with the original deployment.
pub const DEFAULT_ORDERS_PATH: &str = "popular_cars.csv";
