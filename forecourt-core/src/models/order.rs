use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sale from the order log, reduced to the two columns the aggregator
/// reads: which car sold and on what day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Free-text car name exactly as recorded, e.g. "Toyota Corolla".
    pub car_name: String,
    /// Day of sale. Timestamps in the source are truncated to the day.
    pub order_date: NaiveDate,
}

impl Order {
    pub fn new(car_name: impl Into<String>, order_date: NaiveDate) -> Order {
        Order {
            car_name: car_name.into(),
            order_date,
        }
    }
}
