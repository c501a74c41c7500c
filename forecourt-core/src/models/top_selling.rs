use serde::{Deserialize, Serialize};

/// One bar of the top-sellers chart: a car name and how many orders it took
/// inside the requested date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSellingEntry {
    pub car_name: String,
    pub order_count: u64,
}

impl TopSellingEntry {
    pub fn new(car_name: impl Into<String>, order_count: u64) -> TopSellingEntry {
        TopSellingEntry {
            car_name: car_name.into(),
            order_count,
        }
    }
}
