//! HTTP DTOs (Data Transfer Objects) for membership endpoints.
//!
//! These types define the JSON response structure for the membership API.
//! They serve as the boundary between HTTP and the application layer.
//!
//! Money and progress values serialize as decimal strings (`"150.00"`,
//! `"12.5"`) so no precision is lost in transit.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::application::handlers::membership::{ConsumptionUpdate, MemberInfo, MemberLevelUpdate};
use crate::domain::foundation::Timestamp;
use crate::domain::membership::{Privilege, Tier, TierResolution};

// ════════════════════════════════════════════════════════════════════════════════
// Tier DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A tier as shown to clients.
#[derive(Debug, Clone, Serialize)]
pub struct TierResponse {
    pub code: String,
    pub name: String,
    pub min_spend: Decimal,
    /// Exclusive upper bound; null for the top tier.
    pub max_spend: Option<Decimal>,
    pub color: String,
    pub icon: String,
    pub privileges: Vec<Privilege>,
}

impl From<&Tier> for TierResponse {
    fn from(tier: &Tier) -> Self {
        Self {
            code: tier.code.to_string(),
            name: tier.display_name.clone(),
            min_spend: tier.min_spend,
            max_spend: tier.max_spend,
            color: tier.color.clone(),
            icon: tier.icon.clone(),
            privileges: tier.privileges.clone(),
        }
    }
}

/// Response for `GET /member/levels`.
#[derive(Debug, Clone, Serialize)]
pub struct MemberLevelsResponse {
    pub levels: Vec<TierResponse>,
}

impl From<Vec<Tier>> for MemberLevelsResponse {
    fn from(tiers: Vec<Tier>) -> Self {
        Self {
            levels: tiers.iter().map(TierResponse::from).collect(),
        }
    }
}

/// Current tier, next tier and progress between them.
#[derive(Debug, Clone, Serialize)]
pub struct TierProgressResponse {
    pub current_tier: TierResponse,
    pub next_tier: Option<TierResponse>,
    /// Percent toward `next_tier`, two decimal places.
    pub progress: Decimal,
    /// Spend still required for `next_tier`; null at the top tier.
    pub amount_to_next: Option<Decimal>,
}

impl From<&TierResolution> for TierProgressResponse {
    fn from(resolution: &TierResolution) -> Self {
        Self {
            current_tier: TierResponse::from(&resolution.current),
            next_tier: resolution.next.as_ref().map(TierResponse::from),
            progress: resolution.progress.rounded(),
            amount_to_next: resolution.amount_to_next(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Member Info DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for `GET /customer/{id}/member-info`.
#[derive(Debug, Clone, Serialize)]
pub struct MemberInfoResponse {
    pub customer_id: i64,
    pub cumulative_spend: Decimal,
    pub points_balance: i64,
    /// Tier code stored on the customer record.
    pub stored_tier: String,
    /// False when `stored_tier` lags behind `current_tier`.
    pub tier_in_sync: bool,
    /// Registration time (ISO 8601).
    pub registered_at: String,
    pub days_as_member: i64,
    #[serde(flatten)]
    pub tier: TierProgressResponse,
}

impl MemberInfoResponse {
    pub fn from_info(info: &MemberInfo, now: &Timestamp) -> Self {
        Self {
            customer_id: info.customer.id.value(),
            cumulative_spend: info.customer.cumulative_spend,
            points_balance: info.customer.points_balance,
            stored_tier: info.customer.tier_code.to_string(),
            tier_in_sync: info.tier_in_sync(),
            registered_at: info.customer.registered_at.as_datetime().to_rfc3339(),
            days_as_member: info.customer.days_as_member(now),
            tier: TierProgressResponse::from(&info.resolution),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Update DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for `POST /customer/{id}/update-level`.
#[derive(Debug, Clone, Serialize)]
pub struct LevelUpdateResponse {
    pub customer_id: i64,
    pub previous_tier: String,
    /// True if the stored tier was changed by this call.
    pub updated: bool,
    #[serde(flatten)]
    pub tier: TierProgressResponse,
}

impl LevelUpdateResponse {
    pub fn from_update(customer_id: i64, update: &MemberLevelUpdate) -> Self {
        Self {
            customer_id,
            previous_tier: update.previous_tier.to_string(),
            updated: update.updated,
            tier: TierProgressResponse::from(&update.resolution),
        }
    }
}

/// Response for `POST /customer/{id}/update-consumption`.
#[derive(Debug, Clone, Serialize)]
pub struct ConsumptionUpdateResponse {
    pub customer_id: i64,
    pub total_spend: Decimal,
    pub previous_tier: String,
    pub updated: bool,
    #[serde(flatten)]
    pub tier: TierProgressResponse,
}

impl ConsumptionUpdateResponse {
    pub fn from_update(customer_id: i64, update: &ConsumptionUpdate) -> Self {
        Self {
            customer_id,
            total_spend: update.total_spend,
            previous_tier: update.previous_tier.to_string(),
            updated: update.updated,
            tier: TierProgressResponse::from(&update.resolution),
        }
    }
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
