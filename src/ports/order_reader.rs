//! Order reader port (read-only).

use crate::domain::foundation::{CustomerId, DomainError};
use crate::domain::membership::OrderSummary;
use async_trait::async_trait;

/// Read access to order history.
#[async_trait]
pub trait OrderReader: Send + Sync {
    /// All orders placed by `customer_id`, any status.
    ///
    /// An unknown customer yields an empty list, not an error.
    async fn list_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<OrderSummary>, DomainError>;
}
