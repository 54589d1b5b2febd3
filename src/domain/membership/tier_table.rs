//! The ordered tier table.
//!
//! Built once at process start, either from the built-in defaults or from a
//! YAML file, then shared read-only across requests.
//!
//! # Default Configuration
//!
//! | Tier | Min spend | Discount | Points | Birthday | Extras |
//! |------|-----------|----------|--------|----------|--------|
//! | bronze | 0 | none | 1x | 50 | - |
//! | silver | 100 | 95% | 1.2x | 100 | - |
//! | gold | 500 | 90% | 1.5x | 200 | priority |
//! | platinum | 1000 | 85% | 2x | 300 | priority, free delivery |
//! | diamond | 2000 | 80% | 3x | 500 | priority, free delivery, exclusive |

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{MembershipError, Privilege, PrivilegeKind, Tier, TierCode};

static STANDARD_TIERS: Lazy<TierTable> = Lazy::new(|| TierTable::assemble(standard_tiers()));

/// Immutable, ascending list of tiers.
///
/// Invariants (checked by [`TierTable::new`]):
/// - at least one tier
/// - the first tier starts at a spend of 0
/// - thresholds never decrease
/// - codes are unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

#[derive(Debug, Deserialize)]
struct TierTableFile {
    tiers: Vec<Tier>,
}

impl TierTable {
    /// Validates `tiers` and derives each tier's `max_spend` from its successor.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, MembershipError> {
        let first = tiers
            .first()
            .ok_or_else(|| MembershipError::invalid_tier_table("at least one tier is required"))?;

        if first.min_spend != Decimal::ZERO {
            return Err(MembershipError::invalid_tier_table(format!(
                "first tier '{}' must start at 0, got {}",
                first.code, first.min_spend
            )));
        }

        for pair in tiers.windows(2) {
            if pair[1].min_spend < pair[0].min_spend {
                return Err(MembershipError::invalid_tier_table(format!(
                    "tier '{}' ({}) is below preceding tier '{}' ({})",
                    pair[1].code, pair[1].min_spend, pair[0].code, pair[0].min_spend
                )));
            }
        }

        let mut seen = HashSet::new();
        for tier in &tiers {
            if !seen.insert(tier.code.clone()) {
                return Err(MembershipError::invalid_tier_table(format!(
                    "duplicate tier code '{}'",
                    tier.code
                )));
            }
        }

        Ok(Self::assemble(tiers))
    }

    /// The built-in five-tier table.
    pub fn standard() -> Self {
        STANDARD_TIERS.clone()
    }

    /// Parses and validates a YAML document of the form `tiers: [...]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, MembershipError> {
        let file: TierTableFile = serde_yaml::from_str(yaml)
            .map_err(|e| MembershipError::invalid_tier_table(format!("unreadable YAML: {}", e)))?;
        Self::new(file.tiers)
    }

    /// Reads the tier table from a YAML file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, MembershipError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            MembershipError::invalid_tier_table(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&yaml)
    }

    fn assemble(mut tiers: Vec<Tier>) -> Self {
        let upper_bounds: Vec<Option<Decimal>> = tiers
            .iter()
            .skip(1)
            .map(|t| Some(t.min_spend))
            .chain(std::iter::once(None))
            .collect();
        for (tier, max) in tiers.iter_mut().zip(upper_bounds) {
            tier.max_spend = max;
        }
        Self { tiers }
    }

    /// All tiers, lowest first.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Looks up a tier by code.
    pub fn get(&self, code: &TierCode) -> Option<&Tier> {
        self.tiers.iter().find(|t| &t.code == code)
    }

    /// Number of tiers. Never zero: [`TierTable::new`] rejects empty tables.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }
}

fn code(s: &str) -> TierCode {
    TierCode(s.to_string())
}

fn tier(
    code_str: &str,
    display_name: &str,
    min_spend: i64,
    color: &str,
    privileges: Vec<Privilege>,
) -> Tier {
    Tier {
        code: code(code_str),
        display_name: display_name.to_string(),
        min_spend: Decimal::from(min_spend),
        max_spend: None,
        color: color.to_string(),
        icon: format!("tier-{}", code_str),
        privileges,
    }
}

fn discount(value: &str) -> Privilege {
    Privilege::new(
        PrivilegeKind::Discount,
        "Member discount",
        format!("Pay {} of the menu price on every order", value),
        value,
        "discount",
    )
}

fn points(value: &str) -> Privilege {
    Privilege::new(
        PrivilegeKind::Points,
        "Points multiplier",
        format!("Earn {} points for every unit spent", value),
        value,
        "points",
    )
}

fn birthday(value: &str) -> Privilege {
    Privilege::new(
        PrivilegeKind::Birthday,
        "Birthday gift",
        format!("{} bonus points during your birthday month", value),
        value,
        "gift",
    )
}

fn priority() -> Privilege {
    Privilege::new(
        PrivilegeKind::Priority,
        "Priority seating",
        "Skip the queue for tables and reservations",
        "yes",
        "priority",
    )
}

fn free_delivery() -> Privilege {
    Privilege::new(
        PrivilegeKind::FreeDelivery,
        "Free delivery",
        "Delivery fee waived on every order",
        "yes",
        "delivery",
    )
}

fn exclusive() -> Privilege {
    Privilege::new(
        PrivilegeKind::Exclusive,
        "Exclusive menu",
        "Members-only dishes and tasting events",
        "yes",
        "crown",
    )
}

fn standard_tiers() -> Vec<Tier> {
    vec![
        tier("bronze", "Bronze", 0, "#CD7F32", vec![points("1x"), birthday("50")]),
        tier(
            "silver",
            "Silver",
            100,
            "#C0C0C0",
            vec![discount("95%"), points("1.2x"), birthday("100")],
        ),
        tier(
            "gold",
            "Gold",
            500,
            "#FFD700",
            vec![discount("90%"), points("1.5x"), birthday("200"), priority()],
        ),
        tier(
            "platinum",
            "Platinum",
            1000,
            "#E5E4E2",
            vec![
                discount("85%"),
                points("2x"),
                birthday("300"),
                priority(),
                free_delivery(),
            ],
        ),
        tier(
            "diamond",
            "Diamond",
            2000,
            "#B9F2FF",
            vec![
                discount("80%"),
                points("3x"),
                birthday("500"),
                priority(),
                free_delivery(),
                exclusive(),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn codes(table: &TierTable) -> Vec<&str> {
        table.tiers().iter().map(|t| t.code.as_str()).collect()
    }

    // ============================================================
    // Standard Table
    // ============================================================

    #[test]
    fn standard_table_has_five_ordered_tiers() {
        let table = TierTable::standard();
        assert_eq!(
            codes(&table),
            vec!["bronze", "silver", "gold", "platinum", "diamond"]
        );
    }

    #[test]
    fn standard_table_passes_validation() {
        let table = TierTable::standard();
        let revalidated = TierTable::new(table.tiers().to_vec()).unwrap();
        assert_eq!(revalidated, table);
    }

    #[test]
    fn max_spend_is_derived_from_next_tier() {
        let table = TierTable::standard();
        let bounds: Vec<Option<Decimal>> = table.tiers().iter().map(|t| t.max_spend).collect();
        assert_eq!(
            bounds,
            vec![
                Some(dec!(100)),
                Some(dec!(500)),
                Some(dec!(1000)),
                Some(dec!(2000)),
                None
            ]
        );
    }

    #[test]
    fn higher_tiers_grant_more_privileges() {
        let table = TierTable::standard();
        let counts: Vec<usize> = table.tiers().iter().map(|t| t.privileges.len()).collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
        assert!(table
            .get(&TierCode::new("diamond").unwrap())
            .unwrap()
            .privileges
            .iter()
            .any(|p| p.kind == PrivilegeKind::Exclusive));
    }

    // ============================================================
    // Validation
    // ============================================================

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(
            TierTable::new(vec![]),
            Err(MembershipError::InvalidTierTable(_))
        ));
    }

    #[test]
    fn single_tier_table_is_smallest_valid_table() {
        let table = TierTable::new(vec![tier("member", "Member", 0, "#999999", vec![])]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.tiers()[0].max_spend, None);
    }

    #[test]
    fn rejects_non_zero_first_threshold() {
        let tiers = vec![tier("silver", "Silver", 100, "#C0C0C0", vec![])];
        assert!(TierTable::new(tiers).is_err());
    }

    #[test]
    fn rejects_decreasing_thresholds() {
        let tiers = vec![
            tier("bronze", "Bronze", 0, "#CD7F32", vec![]),
            tier("gold", "Gold", 500, "#FFD700", vec![]),
            tier("silver", "Silver", 100, "#C0C0C0", vec![]),
        ];
        assert!(TierTable::new(tiers).is_err());
    }

    #[test]
    fn rejects_duplicate_codes() {
        let tiers = vec![
            tier("bronze", "Bronze", 0, "#CD7F32", vec![]),
            tier("bronze", "Bronze again", 100, "#CD7F32", vec![]),
        ];
        assert!(TierTable::new(tiers).is_err());
    }

    #[test]
    fn accepts_equal_adjacent_thresholds() {
        let tiers = vec![
            tier("bronze", "Bronze", 0, "#CD7F32", vec![]),
            tier("silver", "Silver", 100, "#C0C0C0", vec![]),
            tier("silver_plus", "Silver+", 100, "#C0C0C0", vec![]),
        ];
        let table = TierTable::new(tiers).unwrap();
        assert_eq!(table.len(), 3);
    }

    // ============================================================
    // YAML Loading
    // ============================================================

    const TWO_TIERS: &str = r##"
tiers:
  - code: Regular
    display_name: Regular
    min_spend: 0
    color: "#999999"
    icon: regular
  - code: vip
    display_name: VIP
    min_spend: "250.50"
    color: "#FF0000"
    icon: vip
    privileges:
      - type: discount
        name: VIP discount
        description: Ten percent off
        value: "90%"
        icon: discount
"##;

    #[test]
    fn loads_table_from_yaml() {
        let table = TierTable::from_yaml_str(TWO_TIERS).unwrap();
        assert_eq!(codes(&table), vec!["regular", "vip"]);
        assert_eq!(table.tiers()[1].min_spend, dec!(250.50));
        assert_eq!(table.tiers()[0].max_spend, Some(dec!(250.50)));
        assert_eq!(table.tiers()[1].privileges.len(), 1);
    }

    #[test]
    fn loads_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_TIERS.as_bytes()).unwrap();

        let table = TierTable::load_from_path(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_file_is_a_tier_table_error() {
        let result = TierTable::load_from_path("/nonexistent/tiers.yaml");
        assert!(matches!(result, Err(MembershipError::InvalidTierTable(_))));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let result = TierTable::from_yaml_str("tiers: [ {code: 1");
        assert!(matches!(result, Err(MembershipError::InvalidTierTable(_))));
    }
}
