//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx repositories for customers and orders
//! - `memory` - In-memory stores for tests and local runs
//! - `http` - Axum REST endpoints

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryCustomerStore, InMemoryOrderStore};
pub use postgres::{PostgresCustomerRepository, PostgresOrderReader};
