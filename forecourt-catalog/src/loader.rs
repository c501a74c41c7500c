//! Catalog CSV ingestion: header validation, per-row parsing, row invariants.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use forecourt_core::constants::{
    CATALOG_REQUIRED_COLUMNS, MAX_MODEL_YEAR, MIN_MODEL_YEAR,
};
use forecourt_core::errors::LoadError;
use forecourt_core::models::Vehicle;

use crate::store::Catalog;

/// One raw CSV record, spelled as the source files spell their headers.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    make: String,
    model: String,
    year: i32,
    engine: Option<String>,
    #[serde(rename = "fuelType")]
    fuel_type: Option<String>,
    body: Option<String>,
    #[serde(rename = "standardPrice")]
    standard_price: i64,
    #[serde(default)]
    image_url: Option<String>,
}

impl From<CatalogRow> for Vehicle {
    fn from(row: CatalogRow) -> Vehicle {
        Vehicle {
            make: row.make,
            model: row.model,
            year: row.year,
            engine: row.engine,
            fuel_type: row.fuel_type,
            body: row.body,
            standard_price: row.standard_price,
            image_url: row.image_url,
        }
    }
}

/// Parse a catalog CSV file into a [`Catalog`], preserving source row order.
pub fn load_path(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| LoadError::unreadable(path, e))?;
    let catalog = read_rows(reader, path)?;
    info!(path = %path.display(), rows = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse catalog CSV from any reader. The label stands in for a path in
/// error messages.
pub fn load_reader(input: impl Read, label: &str) -> Result<Catalog, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    read_rows(reader, Path::new(label))
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Catalog, LoadError> {
    let headers = reader
        .headers()
        .map_err(|e| LoadError::unreadable(path, e))?
        .clone();
    for column in CATALOG_REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::missing_column(path, column));
        }
    }

    let mut vehicles = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| record_error(path, &e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: CatalogRow = record
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::malformed_row(path, line, row_message(&e)))?;
        validate_row(&row, path, line)?;
        vehicles.push(Vehicle::from(row));
    }

    Ok(Catalog::from_vehicles(vehicles))
}

fn validate_row(row: &CatalogRow, path: &Path, line: u64) -> Result<(), LoadError> {
    if row.standard_price < 0 {
        return Err(LoadError::malformed_row(
            path,
            line,
            format!("negative standardPrice: {}", row.standard_price),
        ));
    }
    if !(MIN_MODEL_YEAR..=MAX_MODEL_YEAR).contains(&row.year) {
        return Err(LoadError::malformed_row(
            path,
            line,
            format!("implausible year: {}", row.year),
        ));
    }
    Ok(())
}

fn record_error(path: &Path, err: &csv::Error) -> LoadError {
    match err.position() {
        Some(pos) => LoadError::malformed_row(path, pos.line(), err.to_string()),
        None => LoadError::unreadable(path, err),
    }
}

/// Strips the csv crate's record/byte prefix, keeping only the field-level
/// cause for the error message.
fn row_message(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    }
}
