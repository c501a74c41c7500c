/// Forecourt engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Earliest plausible model year (the first production automobile).
pub const MIN_MODEL_YEAR: i32 = 1886;

/// Latest plausible model year accepted at catalog load.
pub const MAX_MODEL_YEAR: i32 = 2100;

/// Required catalog CSV header columns, spelled as the source files spell them.
pub const CATALOG_REQUIRED_COLUMNS: [&str; 7] = [
    "make",
    "model",
    "year",
    "engine",
    "fuelType",
    "body",
    "standardPrice",
];

/// Required order-log CSV header columns.
pub const ORDER_LOG_REQUIRED_COLUMNS: [&str; 2] = ["Car", "order_date"];

/// How many entries the top-sellers chart shows by default.
pub const DEFAULT_TOP_SELLING_LIMIT: usize = 10;
