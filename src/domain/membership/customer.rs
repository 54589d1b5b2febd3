//! The membership-relevant slice of a customer record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TierCode;
use crate::domain::foundation::{CustomerId, Timestamp, ValidationError};

/// Customer fields read and written by the tier pipeline.
///
/// Registration owns the rest of the record; this type only carries what the
/// membership subsystem needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerMembership {
    pub id: CustomerId,
    pub cumulative_spend: Decimal,
    pub tier_code: TierCode,
    pub points_balance: i64,
    pub registered_at: Timestamp,
}

impl CustomerMembership {
    /// Builds a record, rejecting negative spend or points.
    pub fn new(
        id: CustomerId,
        cumulative_spend: Decimal,
        tier_code: TierCode,
        points_balance: i64,
        registered_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        if cumulative_spend < Decimal::ZERO {
            return Err(ValidationError::negative("cumulative_spend", cumulative_spend));
        }
        if points_balance < 0 {
            return Err(ValidationError::negative("points_balance", points_balance));
        }
        Ok(Self {
            id,
            cumulative_spend,
            tier_code,
            points_balance,
            registered_at,
        })
    }

    /// Days since registration, as of `now`.
    pub fn days_as_member(&self, now: &Timestamp) -> i64 {
        self.registered_at.days_until(now)
    }
}
