//! ComputeTotalSpendHandler - Query handler summing a customer's order totals.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::foundation::CustomerId;
use crate::domain::membership::{total_spend, MembershipError, SpendPolicy};
use crate::ports::OrderReader;

/// Query for a customer's lifetime spend.
#[derive(Debug, Clone)]
pub struct ComputeTotalSpendQuery {
    pub customer_id: CustomerId,
}

/// Lifetime spend. Zero when the customer has no orders.
pub type ComputeTotalSpendResult = Decimal;

/// Handler for aggregating order totals.
///
/// Data-access failures are returned as `Infrastructure` and not retried.
pub struct ComputeTotalSpendHandler {
    orders: Arc<dyn OrderReader>,
    policy: SpendPolicy,
}

impl ComputeTotalSpendHandler {
    pub fn new(orders: Arc<dyn OrderReader>, policy: SpendPolicy) -> Self {
        Self { orders, policy }
    }

    pub async fn handle(
        &self,
        query: ComputeTotalSpendQuery,
    ) -> Result<ComputeTotalSpendResult, MembershipError> {
        let orders = self
            .orders
            .list_by_customer(&query.customer_id)
            .await
            .map_err(|e| MembershipError::infrastructure(e.to_string()))?;

        let total = total_spend(&orders, self.policy)?;
        tracing::debug!(
            customer_id = %query.customer_id,
            orders = orders.len(),
            policy = ?self.policy,
            %total,
            "computed total spend"
        );
        Ok(total)
    }
}
