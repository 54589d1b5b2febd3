//! UpdateConsumptionHandler - Command handler running the full tier pipeline:
//! aggregate order totals, store the new cumulative spend, resolve, sync.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::foundation::CustomerId;
use crate::domain::membership::{
    resolve_tier, MembershipError, SpendPolicy, TierCode, TierResolution, TierTable,
};
use crate::ports::{CustomerRepository, OrderReader};

use super::compute_total_spend::{ComputeTotalSpendHandler, ComputeTotalSpendQuery};
use super::sync_tier::{SyncTierCommand, SyncTierHandler};

/// Command to recompute a customer's spend and tier from their orders.
#[derive(Debug, Clone)]
pub struct UpdateConsumptionCommand {
    pub customer_id: CustomerId,
}

/// Outcome of a consumption update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumptionUpdate {
    pub total_spend: Decimal,
    pub previous_tier: TierCode,
    pub resolution: TierResolution,
    pub updated: bool,
}

/// `None` when the customer does not exist.
pub type UpdateConsumptionResult = Option<ConsumptionUpdate>;

/// Handler for the aggregate-resolve-sync pipeline.
///
/// Steps run in order and the first failure aborts the rest. Concurrent runs
/// for the same customer converge because every step recomputes from orders.
pub struct UpdateConsumptionHandler {
    customers: Arc<dyn CustomerRepository>,
    tiers: Arc<TierTable>,
    spend: ComputeTotalSpendHandler,
    sync: SyncTierHandler,
}

impl UpdateConsumptionHandler {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        orders: Arc<dyn OrderReader>,
        tiers: Arc<TierTable>,
        policy: SpendPolicy,
    ) -> Self {
        Self {
            spend: ComputeTotalSpendHandler::new(orders, policy),
            sync: SyncTierHandler::new(customers.clone()),
            customers,
            tiers,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateConsumptionCommand,
    ) -> Result<UpdateConsumptionResult, MembershipError> {
        let Some(customer) = self
            .customers
            .find_membership(&cmd.customer_id)
            .await
            .map_err(|e| MembershipError::infrastructure(e.to_string()))?
        else {
            return Ok(None);
        };

        let total_spend = self
            .spend
            .handle(ComputeTotalSpendQuery {
                customer_id: cmd.customer_id,
            })
            .await?;

        let stored = self
            .customers
            .update_cumulative_spend(&cmd.customer_id, total_spend)
            .await
            .map_err(|e| MembershipError::infrastructure(e.to_string()))?;
        if !stored {
            return Ok(None);
        }

        let resolution = resolve_tier(total_spend, &self.tiers);
        tracing::debug!(
            customer_id = %cmd.customer_id,
            %total_spend,
            tier = %resolution.current.code,
            progress = %resolution.progress,
            "resolved tier from consumption"
        );

        let synced = self
            .sync
            .handle(SyncTierCommand {
                customer_id: cmd.customer_id,
                tier_code: resolution.current.code.clone(),
            })
            .await?;

        Ok(synced.map(|updated| ConsumptionUpdate {
            total_spend,
            previous_tier: customer.tier_code,
            resolution,
            updated,
        }))
    }
}
