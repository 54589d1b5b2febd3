//! Customer repository port.
//!
//! Reads a customer's membership fields and performs the two writes the tier
//! pipeline needs: cumulative spend and the stored tier code.
//!
//! # Example
//!
//! ```ignore
//! async fn promote(
//!     repo: &dyn CustomerRepository,
//!     id: &CustomerId,
//!     code: &TierCode,
//! ) -> Result<bool, DomainError> {
//!     Ok(repo.sync_tier(id, code).await? == TierSyncOutcome::Updated)
//! }
//! ```

use crate::domain::foundation::{CustomerId, DomainError};
use crate::domain::membership::{CustomerMembership, TierCode};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Result of a conditional tier write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierSyncOutcome {
    /// The stored tier differed and was overwritten.
    Updated,
    /// The stored tier already matched; nothing was written.
    Unchanged,
    /// No customer with this id.
    CustomerNotFound,
}

/// Repository port for the customer record's membership fields.
///
/// Implementations must make `sync_tier` a compare-and-write: a write only
/// happens when the stored code differs, so repeated calls with the same code
/// write at most once.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer's membership fields.
    ///
    /// Returns `None` if the customer does not exist.
    async fn find_membership(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerMembership>, DomainError>;

    /// Overwrite the stored cumulative spend.
    ///
    /// Returns `false` if the customer does not exist.
    async fn update_cumulative_spend(
        &self,
        id: &CustomerId,
        spend: Decimal,
    ) -> Result<bool, DomainError>;

    /// Write `code` as the stored tier if it differs from the current value.
    async fn sync_tier(
        &self,
        id: &CustomerId,
        code: &TierCode,
    ) -> Result<TierSyncOutcome, DomainError>;
}
