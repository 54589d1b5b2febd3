//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CustomerRepository` - Customer membership fields (read + conditional write)
//! - `OrderReader` - Order history (read-only)

mod customer_repository;
mod order_reader;

pub use customer_repository::{CustomerRepository, TierSyncOutcome};
pub use order_reader::OrderReader;
