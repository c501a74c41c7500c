use serde::{Deserialize, Serialize};

use crate::models::range::ClosedRange;
use crate::models::vehicle::AttrField;

/// One dropdown's state: either the `"All"` sentinel or a single exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Wildcard; admits every row including rows with a blank cell.
    #[default]
    All,
    /// Exact, case-sensitive match against the cell value.
    Only(String),
}

impl Selection {
    /// Maps the UI's `"All"` sentinel string onto the wildcard variant.
    pub fn from_option(value: &str) -> Selection {
        if value == "All" {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    /// Whether a present cell value passes this selection.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    /// Whether a possibly-blank cell passes. `Only` never matches a blank
    /// cell: a concrete pick excludes rows missing that attribute.
    pub fn admits_opt(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Selection::All, _) => true,
            (Selection::Only(_), None) => false,
            (Selection::Only(wanted), Some(v)) => wanted == v,
        }
    }

    /// True for the wildcard variant.
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

/// The full sidebar state: five categorical selections plus the two slider
/// ranges. All seven conditions are ANDed when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub make: Selection,
    pub model: Selection,
    pub engine: Selection,
    pub fuel_type: Selection,
    pub body: Selection,
    /// Inclusive model-year window.
    pub year_range: ClosedRange<i32>,
    /// Inclusive list-price window, whole currency units.
    pub price_range: ClosedRange<i64>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            make: Selection::All,
            model: Selection::All,
            engine: Selection::All,
            fuel_type: Selection::All,
            body: Selection::All,
            year_range: ClosedRange::new(i32::MIN, i32::MAX),
            price_range: ClosedRange::new(i64::MIN, i64::MAX),
        }
    }
}

impl FilterCriteria {
    pub fn with_make(mut self, selection: Selection) -> Self {
        self.make = selection;
        self
    }

    pub fn with_model(mut self, selection: Selection) -> Self {
        self.model = selection;
        self
    }

    pub fn with_engine(mut self, selection: Selection) -> Self {
        self.engine = selection;
        self
    }

    pub fn with_fuel_type(mut self, selection: Selection) -> Self {
        self.fuel_type = selection;
        self
    }

    pub fn with_body(mut self, selection: Selection) -> Self {
        self.body = selection;
        self
    }

    pub fn with_year_range(mut self, range: ClosedRange<i32>) -> Self {
        self.year_range = range;
        self
    }

    pub fn with_price_range(mut self, range: ClosedRange<i64>) -> Self {
        self.price_range = range;
        self
    }

    /// The categorical selections paired with the column each one inspects,
    /// in sidebar order.
    pub fn selections(&self) -> [(AttrField, &Selection); 5] {
        [
            (AttrField::Make, &self.make),
            (AttrField::Model, &self.model),
            (AttrField::Engine, &self.engine),
            (AttrField::FuelType, &self.fuel_type),
            (AttrField::Body, &self.body),
        ]
    }
}
