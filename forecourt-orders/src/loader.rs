//! Order-log CSV ingestion: header validation and calendar-date parsing.

use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::info;

use forecourt_core::constants::ORDER_LOG_REQUIRED_COLUMNS;
use forecourt_core::errors::LoadError;
use forecourt_core::models::Order;

use crate::store::OrderLog;

#[derive(Debug, Deserialize)]
struct OrderRow {
    #[serde(rename = "Car")]
    car: String,
    order_date: String,
}

/// Parse an order-log CSV file into an [`OrderLog`].
pub fn load_path(path: impl AsRef<Path>) -> Result<OrderLog, LoadError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| LoadError::unreadable(path, e))?;
    let log = read_rows(reader, path)?;
    info!(path = %path.display(), rows = log.len(), "order log loaded");
    Ok(log)
}

/// Parse order-log CSV from any reader. The label stands in for a path in
/// error messages.
pub fn load_reader(input: impl Read, label: &str) -> Result<OrderLog, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    read_rows(reader, Path::new(label))
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<OrderLog, LoadError> {
    let headers = reader
        .headers()
        .map_err(|e| LoadError::unreadable(path, e))?
        .clone();
    for column in ORDER_LOG_REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::missing_column(path, column));
        }
    }

    let mut orders = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| record_error(path, &e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: OrderRow = record
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::malformed_row(path, line, e.to_string()))?;
        let order_date = parse_order_date(&row.order_date)
            .ok_or_else(|| {
                LoadError::malformed_row(
                    path,
                    line,
                    format!("invalid order_date: {:?}", row.order_date),
                )
            })?;
        orders.push(Order::new(row.car, order_date));
    }

    Ok(OrderLog::from_orders(orders))
}

/// Accepts a plain calendar date, or a datetime whose time-of-day is
/// dropped (orders are compared on whole days).
fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

fn record_error(path: &Path, err: &csv::Error) -> LoadError {
    match err.position() {
        Some(pos) => LoadError::malformed_row(path, pos.line(), err.to_string()),
        None => LoadError::unreadable(path, err),
    }
}
