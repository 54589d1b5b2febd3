//! UpdateMemberLevelHandler - Command handler re-resolving a customer's tier
//! from their stored cumulative spend.

use std::sync::Arc;

use crate::domain::foundation::CustomerId;
use crate::domain::membership::{resolve_tier, MembershipError, TierCode, TierResolution, TierTable};
use crate::ports::CustomerRepository;

use super::sync_tier::{SyncTierCommand, SyncTierHandler};

/// Command to bring the stored tier in line with stored spend.
#[derive(Debug, Clone)]
pub struct UpdateMemberLevelCommand {
    pub customer_id: CustomerId,
}

/// Outcome of a level update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberLevelUpdate {
    pub previous_tier: TierCode,
    pub resolution: TierResolution,
    /// False when the stored tier was already correct.
    pub updated: bool,
}

/// `None` when the customer does not exist.
pub type UpdateMemberLevelResult = Option<MemberLevelUpdate>;

pub struct UpdateMemberLevelHandler {
    customers: Arc<dyn CustomerRepository>,
    tiers: Arc<TierTable>,
    sync: SyncTierHandler,
}

impl UpdateMemberLevelHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, tiers: Arc<TierTable>) -> Self {
        let sync = SyncTierHandler::new(customers.clone());
        Self {
            customers,
            tiers,
            sync,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateMemberLevelCommand,
    ) -> Result<UpdateMemberLevelResult, MembershipError> {
        let Some(customer) = self
            .customers
            .find_membership(&cmd.customer_id)
            .await
            .map_err(|e| MembershipError::infrastructure(e.to_string()))?
        else {
            return Ok(None);
        };

        let resolution = resolve_tier(customer.cumulative_spend, &self.tiers);
        tracing::debug!(
            customer_id = %cmd.customer_id,
            spend = %customer.cumulative_spend,
            tier = %resolution.current.code,
            "resolved member level"
        );

        let synced = self
            .sync
            .handle(SyncTierCommand {
                customer_id: cmd.customer_id,
                tier_code: resolution.current.code.clone(),
            })
            .await?;

        // Row may vanish between the read and the write.
        Ok(synced.map(|updated| MemberLevelUpdate {
            previous_tier: customer.tier_code,
            resolution,
            updated,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCustomerStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::membership::CustomerMembership;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn customer_id() -> CustomerId {
        CustomerId::new(3).unwrap()
    }

    fn store(spend: Decimal, tier: &str) -> Arc<InMemoryCustomerStore> {
        Arc::new(InMemoryCustomerStore::with_customers([CustomerMembership::new(
            customer_id(),
            spend,
            TierCode::new(tier).unwrap(),
            0,
            Timestamp::now(),
        )
        .unwrap()]))
    }

    fn handler(store: Arc<InMemoryCustomerStore>) -> UpdateMemberLevelHandler {
        UpdateMemberLevelHandler::new(store, Arc::new(TierTable::standard()))
    }

    fn command() -> UpdateMemberLevelCommand {
        UpdateMemberLevelCommand {
            customer_id: customer_id(),
        }
    }

    #[tokio::test]
    async fn promotes_stale_tier() {
        let store = store(dec!(1200), "silver");
        let result = handler(store.clone()).handle(command()).await.unwrap().unwrap();

        assert_eq!(result.previous_tier.as_str(), "silver");
        assert_eq!(result.resolution.current.code.as_str(), "platinum");
        assert!(result.updated);

        let stored = store.get(&customer_id()).await.unwrap();
        assert_eq!(stored.tier_code.as_str(), "platinum");
    }

    #[tokio::test]
    async fn repeated_update_is_idempotent() {
        let store = store(dec!(150), "bronze");
        let handler = handler(store.clone());

        let first = handler.handle(command()).await.unwrap().unwrap();
        let second = handler.handle(command()).await.unwrap().unwrap();

        assert!(first.updated);
        assert!(!second.updated);
        assert_eq!(second.previous_tier.as_str(), "silver");
        assert_eq!(store.tier_writes(), 1);
    }

    #[tokio::test]
    async fn missing_customer_returns_none() {
        let handler = handler(Arc::new(InMemoryCustomerStore::new()));
        assert!(handler.handle(command()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_failure_is_surfaced() {
        let store = store(dec!(150), "bronze");
        store.set_failing(true);
        let result = handler(store).handle(command()).await;
        assert!(matches!(result, Err(MembershipError::Infrastructure(_))));
    }
}
