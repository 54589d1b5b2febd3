//! Membership domain module.
//!
//! Spend-based membership tiers: which tier a customer belongs to, what it
//! grants, and how far they are from the next one.
//!
//! # Module Structure
//!
//! - `tier` - Tier and TierCode
//! - `privilege` - Benefits attached to a tier
//! - `tier_table` - The ordered, validated tier list
//! - `resolver` - Spend to tier/progress resolution
//! - `spend` - Order summaries and spend aggregation
//! - `customer` - Customer membership record
//! - `errors` - MembershipError

mod customer;
mod errors;
mod privilege;
mod resolver;
mod spend;
mod tier;
mod tier_table;

pub use customer::CustomerMembership;
pub use errors::MembershipError;
pub use privilege::{Privilege, PrivilegeKind};
pub use resolver::{resolve_tier, TierResolution};
pub use spend::{total_spend, OrderStatus, OrderSummary, SpendPolicy};
pub use tier::{Tier, TierCode};
pub use tier_table::TierTable;
