//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `membership` - Tiers, privileges, spend aggregation and tier resolution

pub mod foundation;
pub mod membership;
