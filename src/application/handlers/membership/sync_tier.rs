//! SyncTierHandler - Command handler writing a resolved tier back to the customer.

use std::sync::Arc;

use crate::domain::foundation::CustomerId;
use crate::domain::membership::{MembershipError, TierCode};
use crate::ports::{CustomerRepository, TierSyncOutcome};

/// Command to store `tier_code` as the customer's tier if it differs.
#[derive(Debug, Clone)]
pub struct SyncTierCommand {
    pub customer_id: CustomerId,
    pub tier_code: TierCode,
}

/// `Some(true)` if written, `Some(false)` if already current, `None` if the
/// customer does not exist.
pub type SyncTierResult = Option<bool>;

/// Handler for the stale-to-synced tier transition.
pub struct SyncTierHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl SyncTierHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    pub async fn handle(&self, cmd: SyncTierCommand) -> Result<SyncTierResult, MembershipError> {
        let outcome = self
            .customers
            .sync_tier(&cmd.customer_id, &cmd.tier_code)
            .await
            .map_err(|e| MembershipError::infrastructure(e.to_string()))?;

        match outcome {
            TierSyncOutcome::Updated => {
                tracing::info!(
                    customer_id = %cmd.customer_id,
                    tier = %cmd.tier_code,
                    "membership tier updated"
                );
                Ok(Some(true))
            }
            TierSyncOutcome::Unchanged => Ok(Some(false)),
            TierSyncOutcome::CustomerNotFound => {
                tracing::debug!(customer_id = %cmd.customer_id, "tier sync for unknown customer");
                Ok(None)
            }
        }
    }
}
