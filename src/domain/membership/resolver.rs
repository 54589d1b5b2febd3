//! Tier resolution from cumulative spend.
//!
//! Pure functions, no I/O. Given a spend amount and the tier table this picks
//! the current tier, the next tier (if any), and how far the customer is
//! between the two.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{Tier, TierTable};
use crate::domain::foundation::Percentage;

/// Outcome of resolving a spend amount against the tier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierResolution {
    /// The spend that was resolved.
    pub spend: Decimal,
    /// Highest tier whose threshold is at or below `spend`.
    pub current: Tier,
    /// Lowest tier whose threshold is above `spend`. `None` at the top.
    pub next: Option<Tier>,
    /// Progress from `current` toward `next`, 0-100.
    pub progress: Percentage,
}

impl TierResolution {
    /// Spend still required to reach the next tier.
    pub fn amount_to_next(&self) -> Option<Decimal> {
        self.next
            .as_ref()
            .map(|next| (next.min_spend - self.spend).max(Decimal::ZERO))
    }
}

/// Resolves `spend` against `table`.
///
/// - `current`: greatest `min_spend <= spend` (closed lower bound). Equal
///   thresholds resolve to the later tier.
/// - `next`: first tier after `current` with `min_spend > spend`.
/// - progress: `(spend - current.min) / (next.min - current.min) * 100`,
///   clamped to 0-100; 100 when there is no next tier or the bracket is empty.
///
/// Negative spend is not rejected here; it resolves to the lowest tier with
/// progress clamped to 0.
pub fn resolve_tier(spend: Decimal, table: &TierTable) -> TierResolution {
    let tiers = table.tiers();

    let current_index = tiers
        .iter()
        .rposition(|t| t.min_spend <= spend)
        .unwrap_or(0);
    let current = &tiers[current_index];

    let next = tiers[current_index + 1..]
        .iter()
        .find(|t| t.min_spend > spend);

    let progress = match next {
        None => Percentage::HUNDRED,
        Some(next) => progress_between(spend, current.min_spend, next.min_spend),
    };

    TierResolution {
        spend,
        current: current.clone(),
        next: next.cloned(),
        progress,
    }
}

fn progress_between(spend: Decimal, lower: Decimal, upper: Decimal) -> Percentage {
    let span = upper - lower;
    if span <= Decimal::ZERO {
        return Percentage::HUNDRED;
    }
    Percentage::clamped((spend - lower) / span * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::TierCode;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn standard() -> TierTable {
        TierTable::standard()
    }

    fn resolve(spend: Decimal) -> TierResolution {
        resolve_tier(spend, &standard())
    }

    fn plain_tier(code: &str, min: i64) -> Tier {
        Tier {
            code: TierCode::new(code).unwrap(),
            display_name: code.to_string(),
            min_spend: Decimal::from(min),
            max_spend: None,
            color: "#000000".to_string(),
            icon: code.to_string(),
            privileges: vec![],
        }
    }

    // ============================================================
    // Current Tier
    // ============================================================

    #[test]
    fn zero_spend_is_bronze() {
        assert_eq!(resolve(dec!(0)).current.code.as_str(), "bronze");
    }

    #[test]
    fn just_below_silver_is_bronze() {
        assert_eq!(resolve(dec!(99.99)).current.code.as_str(), "bronze");
    }

    #[test]
    fn exactly_silver_threshold_is_silver() {
        assert_eq!(resolve(dec!(100)).current.code.as_str(), "silver");
    }

    #[test]
    fn diamond_threshold_is_top_tier() {
        let resolution = resolve(dec!(2000));
        assert_eq!(resolution.current.code.as_str(), "diamond");
        assert!(resolution.next.is_none());
        assert_eq!(resolution.progress, Percentage::HUNDRED);
        assert_eq!(resolution.amount_to_next(), None);
    }

    #[test]
    fn every_threshold_is_a_closed_lower_bound() {
        let table = standard();
        for tier in table.tiers() {
            let resolution = resolve_tier(tier.min_spend, &table);
            assert_eq!(resolution.current, *tier);
        }
    }

    // ============================================================
    // Next Tier & Progress
    // ============================================================

    #[test]
    fn zero_spend_progress_is_against_silver() {
        let resolution = resolve(dec!(0));
        assert_eq!(resolution.next.unwrap().code.as_str(), "silver");
        assert_eq!(resolution.progress, Percentage::ZERO);
    }

    #[test]
    fn one_hundred_fifty_is_twelve_and_a_half_percent_to_gold() {
        let resolution = resolve(dec!(150.00));
        assert_eq!(resolution.current.code.as_str(), "silver");
        assert_eq!(resolution.next.as_ref().unwrap().code.as_str(), "gold");
        assert_eq!(resolution.progress.value(), dec!(12.5));
        assert_eq!(resolution.amount_to_next(), Some(dec!(350.00)));
    }

    #[test]
    fn progress_just_below_next_threshold_is_below_hundred() {
        let resolution = resolve(dec!(499.99));
        assert!(resolution.progress.value() < dec!(100));
        assert!(resolution.progress.value() > dec!(99));
    }

    #[test]
    fn equal_thresholds_resolve_to_later_tier() {
        let table = TierTable::new(vec![
            plain_tier("bronze", 0),
            plain_tier("silver", 100),
            plain_tier("silver_plus", 100),
            plain_tier("gold", 500),
        ])
        .unwrap();

        let resolution = resolve_tier(dec!(100), &table);
        assert_eq!(resolution.current.code.as_str(), "silver_plus");
        assert_eq!(resolution.next.unwrap().code.as_str(), "gold");

        let below = resolve_tier(dec!(50), &table);
        assert_eq!(below.next.unwrap().code.as_str(), "silver");
    }

    #[test]
    fn empty_bracket_is_full_progress() {
        let table = TierTable::new(vec![plain_tier("a", 0), plain_tier("b", 0), plain_tier("c", 10)])
            .unwrap();
        let resolution = resolve_tier(dec!(-1), &table);
        assert_eq!(resolution.current.code.as_str(), "a");
        assert_eq!(resolution.next.unwrap().code.as_str(), "b");
        assert_eq!(resolution.progress, Percentage::HUNDRED);
    }

    #[test]
    fn negative_spend_falls_back_to_lowest_tier() {
        let resolution = resolve(dec!(-25));
        assert_eq!(resolution.current.code.as_str(), "bronze");
        assert_eq!(resolution.next.unwrap().code.as_str(), "silver");
        assert_eq!(resolution.progress, Percentage::ZERO);
    }

    #[test]
    fn single_tier_table_is_always_complete() {
        let table = TierTable::new(vec![plain_tier("member", 0)]).unwrap();
        let resolution = resolve_tier(dec!(42), &table);
        assert!(resolution.next.is_none());
        assert_eq!(resolution.progress, Percentage::HUNDRED);
    }

    // ============================================================
    // Properties
    // ============================================================

    proptest! {
        #[test]
        fn progress_is_always_between_zero_and_hundred(cents in 0i64..500_000) {
            let resolution = resolve(Decimal::new(cents, 2));
            prop_assert!(resolution.progress.value() >= Decimal::ZERO);
            prop_assert!(resolution.progress.value() <= Decimal::ONE_HUNDRED);
        }

        #[test]
        fn current_tier_contains_spend(cents in 0i64..500_000) {
            let spend = Decimal::new(cents, 2);
            let resolution = resolve(spend);
            prop_assert!(resolution.current.contains(spend));
        }

        #[test]
        fn progress_is_monotonic_within_a_bracket(a in 0i64..300_000, b in 0i64..300_000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low = resolve(Decimal::new(low, 2));
            let high = resolve(Decimal::new(high, 2));
            if low.current.code == high.current.code {
                prop_assert!(low.progress <= high.progress);
            }
        }
    }
}
