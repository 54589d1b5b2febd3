//! Membership handlers.
//!
//! Command and query handlers for the tier pipeline.
//!
//! ## Commands
//! - Sync a resolved tier onto the customer record
//! - Re-resolve the level from stored spend
//! - Recompute spend from orders, then re-resolve the level
//!
//! ## Queries
//! - Total spend for a customer
//! - Member info (record + resolved tier)
//! - List configured levels

mod compute_total_spend;
mod get_member_info;
mod list_member_levels;
mod sync_tier;
mod update_consumption;
mod update_member_level;

// Commands
pub use sync_tier::{SyncTierCommand, SyncTierHandler, SyncTierResult};
pub use update_consumption::{
    ConsumptionUpdate, UpdateConsumptionCommand, UpdateConsumptionHandler,
    UpdateConsumptionResult,
};
pub use update_member_level::{
    MemberLevelUpdate, UpdateMemberLevelCommand, UpdateMemberLevelHandler,
    UpdateMemberLevelResult,
};

// Queries
pub use compute_total_spend::{
    ComputeTotalSpendHandler, ComputeTotalSpendQuery, ComputeTotalSpendResult,
};
pub use get_member_info::{GetMemberInfoHandler, GetMemberInfoQuery, GetMemberInfoResult, MemberInfo};
pub use list_member_levels::{ListMemberLevelsHandler, ListMemberLevelsQuery, ListMemberLevelsResult};
