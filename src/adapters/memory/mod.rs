//! In-memory adapters for tests and local runs without a database.

mod customer_store;
mod order_store;

pub use customer_store::InMemoryCustomerStore;
pub use order_store::InMemoryOrderStore;
