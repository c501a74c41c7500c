use serde::{Deserialize, Serialize};

use crate::errors::PricingError;

/// The fixed optional-extras menu. Prices are flat, in whole currency units,
/// and the set is closed: unknown keys are rejected, never priced at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    Gps,
    HeatedSeats,
    ExtendedWarranty,
    TintedWindows,
    ParkingAssist,
}

impl AddOn {
    /// Every add-on, in menu order.
    pub const ALL: [AddOn; 5] = [
        AddOn::Gps,
        AddOn::HeatedSeats,
        AddOn::ExtendedWarranty,
        AddOn::TintedWindows,
        AddOn::ParkingAssist,
    ];

    /// Flat price in whole currency units.
    pub fn price(&self) -> i64 {
        match self {
            AddOn::Gps => 500,
            AddOn::HeatedSeats => 1_200,
            AddOn::ExtendedWarranty => 1_000,
            AddOn::TintedWindows => 400,
            AddOn::ParkingAssist => 300,
        }
    }

    /// Stable machine key, used in request payloads and config.
    pub fn key(&self) -> &'static str {
        match self {
            AddOn::Gps => "gps",
            AddOn::HeatedSeats => "heated_seats",
            AddOn::ExtendedWarranty => "extended_warranty",
            AddOn::TintedWindows => "tinted_windows",
            AddOn::ParkingAssist => "parking_assist",
        }
    }

    /// Human-readable label, as shown in the extras checklist.
    pub fn label(&self) -> &'static str {
        match self {
            AddOn::Gps => "GPS Navigation System",
            AddOn::HeatedSeats => "Heated Seats",
            AddOn::ExtendedWarranty => "Extended Warranty",
            AddOn::TintedWindows => "Tinted Windows",
            AddOn::ParkingAssist => "360 Parking Assist",
        }
    }

    /// Resolves a machine key back to the add-on it names.
    pub fn from_key(key: &str) -> Result<AddOn, PricingError> {
        AddOn::ALL
            .iter()
            .copied()
            .find(|a| a.key() == key)
            .ok_or_else(|| PricingError::UnknownAddOn {
                key: key.to_string(),
            })
    }
}
