//! The in-memory order log and its read API.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;

use forecourt_core::errors::{LoadError, QueryError};
use forecourt_core::models::{ClosedRange, Order};

use crate::{cache, loader};

/// The historical order log. Loaded once, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLog {
    orders: Vec<Order>,
}

impl OrderLog {
    /// Parse an order-log CSV straight from disk, bypassing the cache.
    pub fn load(path: impl AsRef<Path>) -> Result<OrderLog, LoadError> {
        loader::load_path(path)
    }

    /// Memoized entry point, same contract as the catalog store: one parse
    /// per path for the process lifetime, failures left uncached.
    pub fn open(path: impl AsRef<Path>) -> Result<Arc<OrderLog>, LoadError> {
        cache::open(path.as_ref())
    }

    /// In-memory construction for tests and embedders.
    pub fn from_orders(orders: Vec<Order>) -> OrderLog {
        OrderLog { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Earliest and latest order date, used to clamp the chart's date
    /// pickers. Fails on an empty log.
    pub fn date_bounds(&self) -> Result<ClosedRange<NaiveDate>, QueryError> {
        let mut dates = self.orders.iter().map(|o| o.order_date);
        let first = dates
            .next()
            .ok_or_else(|| QueryError::empty_dataset("orders"))?;
        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Ok(ClosedRange::new(min, max))
    }
}
