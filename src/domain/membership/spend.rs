//! Cumulative spend aggregation over a customer's orders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::MembershipError;
use crate::domain::foundation::{CustomerId, OrderId, ValidationError};

/// Lifecycle state of an order, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            other => Err(ValidationError::invalid_format(
                "order_status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}

/// The slice of an order the spend aggregation reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub total_price: Decimal,
    pub status: OrderStatus,
}

/// Which orders count toward cumulative spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendPolicy {
    /// Every order counts, whatever its status.
    #[default]
    AllOrders,
    /// Cancelled orders are ignored.
    ExcludeCancelled,
}

impl SpendPolicy {
    /// Returns true if an order in `status` contributes to spend.
    pub fn counts(&self, status: OrderStatus) -> bool {
        match self {
            SpendPolicy::AllOrders => true,
            SpendPolicy::ExcludeCancelled => status != OrderStatus::Cancelled,
        }
    }
}

/// Sums `total_price` over the orders the policy admits. Zero for no orders.
///
/// Fails instead of panicking if the sum leaves `Decimal`'s range.
pub fn total_spend(
    orders: &[OrderSummary],
    policy: SpendPolicy,
) -> Result<Decimal, MembershipError> {
    orders
        .iter()
        .filter(|o| policy.counts(o.status))
        .try_fold(Decimal::ZERO, |total, order| {
            total.checked_add(order.total_price).ok_or_else(|| {
                MembershipError::infrastructure(format!(
                    "spend total overflowed at order {}",
                    order.id
                ))
            })
        })
}
