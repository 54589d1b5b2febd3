//! In-memory order store for testing and local development.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CustomerId, DomainError, OrderId};
use crate::domain::membership::{OrderStatus, OrderSummary};
use crate::ports::OrderReader;

#[derive(Debug)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<OrderSummary>>>,
    next_id: AtomicI64,
    fail_requests: AtomicBool,
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
            fail_requests: AtomicBool::new(false),
        }
    }

    /// Record an order and return its id. Ids are assigned by the store.
    pub async fn place(
        &self,
        customer_id: CustomerId,
        total_price: Decimal,
        status: OrderStatus,
    ) -> OrderId {
        let id = OrderId::from_raw(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.orders.write().await.push(OrderSummary {
            id,
            customer_id,
            total_price,
            status,
        });
        id
    }

    /// Make every subsequent call fail with a database error.
    pub fn set_failing(&self, failing: bool) {
        self.fail_requests.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl OrderReader for InMemoryOrderStore {
    async fn list_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<OrderSummary>, DomainError> {
        if self.fail_requests.load(Ordering::SeqCst) {
            return Err(DomainError::database("order store unavailable"));
        }
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .filter(|o| &o.customer_id == customer_id)
            .cloned()
            .collect())
    }
}
