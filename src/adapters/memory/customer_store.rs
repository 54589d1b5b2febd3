//! In-memory customer store for testing and local development.
//!
//! Counts tier writes so callers can observe that repeated syncs with the
//! same tier write only once.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CustomerId, DomainError};
use crate::domain::membership::{CustomerMembership, TierCode};
use crate::ports::{CustomerRepository, TierSyncOutcome};

/// Customer records held in a HashMap behind an async lock.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: Arc<RwLock<HashMap<CustomerId, CustomerMembership>>>,
    tier_writes: AtomicUsize,
    fail_requests: AtomicBool,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `customers`.
    pub fn with_customers(customers: impl IntoIterator<Item = CustomerMembership>) -> Self {
        let map = customers.into_iter().map(|c| (c.id, c)).collect();
        Self {
            customers: Arc::new(RwLock::new(map)),
            ..Self::default()
        }
    }

    /// Insert or replace a customer record.
    pub async fn insert(&self, customer: CustomerMembership) {
        self.customers.write().await.insert(customer.id, customer);
    }

    /// Snapshot of a stored record.
    pub async fn get(&self, id: &CustomerId) -> Option<CustomerMembership> {
        self.customers.read().await.get(id).cloned()
    }

    /// Number of tier writes performed so far.
    pub fn tier_writes(&self) -> usize {
        self.tier_writes.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail with a database error.
    pub fn set_failing(&self, failing: bool) {
        self.fail_requests.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.fail_requests.load(Ordering::SeqCst) {
            return Err(DomainError::database("customer store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerStore {
    async fn find_membership(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerMembership>, DomainError> {
        self.check_available()?;
        Ok(self.customers.read().await.get(id).cloned())
    }

    async fn update_cumulative_spend(
        &self,
        id: &CustomerId,
        spend: Decimal,
    ) -> Result<bool, DomainError> {
        self.check_available()?;
        let mut customers = self.customers.write().await;
        match customers.get_mut(id) {
            Some(customer) => {
                customer.cumulative_spend = spend;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn sync_tier(
        &self,
        id: &CustomerId,
        code: &TierCode,
    ) -> Result<TierSyncOutcome, DomainError> {
        self.check_available()?;
        let mut customers = self.customers.write().await;
        let Some(customer) = customers.get_mut(id) else {
            return Ok(TierSyncOutcome::CustomerNotFound);
        };
        if &customer.tier_code == code {
            return Ok(TierSyncOutcome::Unchanged);
        }
        customer.tier_code = code.clone();
        self.tier_writes.fetch_add(1, Ordering::SeqCst);
        Ok(TierSyncOutcome::Updated)
    }
}
