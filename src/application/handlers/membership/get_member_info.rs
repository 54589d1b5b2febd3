//! GetMemberInfoHandler - Query handler for a customer's membership card.

use std::sync::Arc;

use crate::domain::foundation::CustomerId;
use crate::domain::membership::{
    resolve_tier, CustomerMembership, MembershipError, TierResolution, TierTable,
};
use crate::ports::CustomerRepository;

/// Query to get a customer's membership details.
#[derive(Debug, Clone)]
pub struct GetMemberInfoQuery {
    pub customer_id: CustomerId,
}

/// Customer record joined with the tier its stored spend resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub customer: CustomerMembership,
    pub resolution: TierResolution,
}

impl MemberInfo {
    /// True when the stored tier code matches the resolved tier.
    pub fn tier_in_sync(&self) -> bool {
        self.customer.tier_code == self.resolution.current.code
    }
}

/// Result of the query. `None` when the customer does not exist.
pub type GetMemberInfoResult = Option<MemberInfo>;

/// Handler for reading membership details.
///
/// Resolution uses the stored cumulative spend. Nothing is written; a stale
/// stored tier is reported through [`MemberInfo::tier_in_sync`] and corrected
/// by the update endpoints.
pub struct GetMemberInfoHandler {
    customers: Arc<dyn CustomerRepository>,
    tiers: Arc<TierTable>,
}

impl GetMemberInfoHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, tiers: Arc<TierTable>) -> Self {
        Self { customers, tiers }
    }

    pub async fn handle(
        &self,
        query: GetMemberInfoQuery,
    ) -> Result<GetMemberInfoResult, MembershipError> {
        let customer = self
            .customers
            .find_membership(&query.customer_id)
            .await
            .map_err(|e| MembershipError::infrastructure(e.to_string()))?;

        Ok(customer.map(|customer| {
            let resolution = resolve_tier(customer.cumulative_spend, &self.tiers);
            MemberInfo {
                customer,
                resolution,
            }
        }))
    }
}
