use serde::{Deserialize, Serialize};

/// One catalog row. Loaded once at startup and immutable for the session.
///
/// Row invariants (`standard_price >= 0`, `year` within the plausible model
/// year bounds) are enforced at load time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Manufacturer, e.g. "Toyota".
    pub make: String,
    /// Model name, e.g. "Corolla".
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Engine designation; absent where the source leaves the cell blank.
    pub engine: Option<String>,
    /// Fuel type, e.g. "Petrol", "Diesel", "Electric".
    pub fuel_type: Option<String>,
    /// Body style, e.g. "Hatchback", "SUV".
    pub body: Option<String>,
    /// List price in whole currency units. Never negative.
    pub standard_price: i64,
    /// Marketing image for the detail pane, when the source has one.
    pub image_url: Option<String>,
}

impl Vehicle {
    /// The label the detail selector shows for this row: `"Make Model (Year)"`.
    pub fn display_label(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }
}

/// The five filterable string columns of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrField {
    Make,
    Model,
    Engine,
    FuelType,
    Body,
}

impl AttrField {
    /// Every filterable column, in sidebar order.
    pub const ALL: [AttrField; 5] = [
        AttrField::Make,
        AttrField::Model,
        AttrField::Engine,
        AttrField::FuelType,
        AttrField::Body,
    ];

    /// The column's value on a row; `None` where the source left it blank.
    pub fn value_of<'v>(&self, vehicle: &'v Vehicle) -> Option<&'v str> {
        match self {
            AttrField::Make => Some(vehicle.make.as_str()),
            AttrField::Model => Some(vehicle.model.as_str()),
            AttrField::Engine => vehicle.engine.as_deref(),
            AttrField::FuelType => vehicle.fuel_type.as_deref(),
            AttrField::Body => vehicle.body.as_deref(),
        }
    }
}
