//! Membership tier definitions.
//!
//! A tier is a named spend bracket. Tiers are defined once at startup and
//! never mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Privilege;
use crate::domain::foundation::ValidationError;

/// Unique, lowercase code identifying a tier (e.g. `silver`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TierCode(pub(super) String);

impl TierCode {
    /// Creates a TierCode, normalizing case and surrounding whitespace.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = code.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("tier_code"));
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ValidationError::invalid_format(
                "tier_code",
                format!("'{}' may only contain a-z, 0-9 and '_'", normalized),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TierCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TierCode> for String {
    fn from(code: TierCode) -> Self {
        code.0
    }
}

impl fmt::Display for TierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A membership tier and the privileges it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub code: TierCode,
    pub display_name: String,
    /// Inclusive lower bound of cumulative spend.
    pub min_spend: Decimal,
    /// Exclusive upper bound, derived from the next tier. `None` for the top tier.
    #[serde(default, skip_deserializing)]
    pub max_spend: Option<Decimal>,
    pub color: String,
    pub icon: String,
    #[serde(default)]
    pub privileges: Vec<Privilege>,
}

impl Tier {
    /// Returns true if `spend` falls inside this tier's bracket.
    pub fn contains(&self, spend: Decimal) -> bool {
        spend >= self.min_spend && self.max_spend.map_or(true, |max| spend < max)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tier(min: Decimal, max: Option<Decimal>) -> Tier {
        Tier {
            code: TierCode::new("silver").unwrap(),
            display_name: "Silver".to_string(),
            min_spend: min,
            max_spend: max,
            color: "#C0C0C0".to_string(),
            icon: "silver".to_string(),
            privileges: vec![],
        }
    }

    #[test]
    fn tier_code_is_normalized() {
        let code = TierCode::new("  Gold ").unwrap();
        assert_eq!(code.as_str(), "gold");
    }

    #[test]
    fn tier_code_rejects_empty() {
        assert!(matches!(
            TierCode::new("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn tier_code_rejects_punctuation() {
        assert!(TierCode::new("gold-plus").is_err());
    }

    #[test]
    fn tier_code_deserializes_through_validation() {
        let code: TierCode = serde_json::from_str("\"PLATINUM\"").unwrap();
        assert_eq!(code.as_str(), "platinum");
        assert!(serde_json::from_str::<TierCode>("\"\"").is_err());
    }

    #[test]
    fn contains_uses_closed_lower_bound() {
        let silver = tier(dec!(100), Some(dec!(500)));
        assert!(silver.contains(dec!(100)));
        assert!(silver.contains(dec!(499.99)));
        assert!(!silver.contains(dec!(500)));
        assert!(!silver.contains(dec!(99.99)));
    }

    #[test]
    fn open_ended_tier_has_no_upper_bound() {
        let top = tier(dec!(2000), None);
        assert!(top.contains(dec!(1000000)));
        assert!(!top.contains(dec!(1999.99)));
    }
}
