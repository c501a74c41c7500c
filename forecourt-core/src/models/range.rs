use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` interval.
///
/// Both endpoints are part of the range. An inverted range (`min > max`) is
/// representable; every consuming operation rejects it up front instead of
/// silently matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> ClosedRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within `[min, max]`, endpoints included.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// True when `min > max`. Inverted ranges are caller errors, not empty
    /// ranges.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}
