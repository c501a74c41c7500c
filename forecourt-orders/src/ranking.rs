//! Date-windowed top-seller ranking.
//!
//! Orders are compared on whole calendar days, so the entire end day is
//! inside the window. Equal counts rank by first appearance in the
//! date-ascending window, which keeps the chart deterministic across runs.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use forecourt_core::errors::QueryError;
use forecourt_core::models::{Order, TopSellingEntry};

use crate::store::OrderLog;

/// Count orders per car inside `[start, end]` and return the top `limit`
/// entries, count descending. Rejects `start > end` before touching the log.
pub fn top_selling(
    log: &OrderLog,
    start: NaiveDate,
    end: NaiveDate,
    limit: usize,
) -> Result<Vec<TopSellingEntry>, QueryError> {
    if start > end {
        return Err(QueryError::inverted_range(start, end));
    }

    let mut window: Vec<&Order> = log
        .orders()
        .iter()
        .filter(|o| o.order_date >= start && o.order_date <= end)
        .collect();
    // Stable sort: orders on the same day keep their log order, so first
    // appearance is well defined.
    window.sort_by_key(|o| o.order_date);

    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
    for order in &window {
        let next_rank = counts.len();
        let entry = counts
            .entry(order.car_name.as_str())
            .or_insert((0, next_rank));
        entry.0 += 1;
    }

    let distinct = counts.len();
    let mut ranked: Vec<(&str, u64, usize)> = counts
        .into_iter()
        .map(|(name, (count, first_seen))| (name, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(limit);

    debug!(
        %start,
        %end,
        window = window.len(),
        distinct,
        entries = ranked.len(),
        "top-selling ranking computed"
    );

    Ok(ranked
        .into_iter()
        .map(|(name, count, _)| TopSellingEntry::new(name, count))
        .collect())
}
