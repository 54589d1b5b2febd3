//! Percentage value object (0-100 scale).

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A decimal value between 0 and 100 inclusive.
///
/// Built only through [`Percentage::clamped`] and the constants, so the range always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    /// Creates a new Percentage, clamping to the valid range.
    pub fn clamped(value: Decimal) -> Self {
        Self(value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    /// Returns the value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the value rounded for display (two decimal places, normalized).
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(2).normalize()
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.rounded())
    }
}
