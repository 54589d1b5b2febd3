//! Axum router configuration for membership endpoints.
//!
//! This module defines the route structure for membership-related API endpoints
//! and wires them to their corresponding handlers.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_member_info, get_member_levels, health, update_consumption, update_member_level,
    MembershipAppState,
};

/// Create the membership API routes.
///
/// # Routes
///
/// ## Customer Endpoints
/// - `GET /customer/:id/member-info` - Stored spend, tier and progress
/// - `POST /customer/:id/update-level` - Re-resolve tier from stored spend
/// - `POST /customer/:id/update-consumption` - Recompute spend from orders, then tier
///
/// ## Catalog Endpoints
/// - `GET /member/levels` - All configured tiers
///
/// ## Operational
/// - `GET /health` - Liveness probe
pub fn membership_routes() -> Router<MembershipAppState> {
    Router::new()
        // Customer endpoints
        .route("/customer/:id/member-info", get(get_member_info))
        .route("/customer/:id/update-level", post(update_member_level))
        .route("/customer/:id/update-consumption", post(update_consumption))
        // Catalog
        .route("/member/levels", get(get_member_levels))
        .route("/health", get(health))
}

/// Create the complete membership router, mounted under `/api`.
///
/// # Example
///
/// ```ignore
/// use crate::adapters::http::membership::{membership_router, MembershipAppState};
///
/// let app_state = MembershipAppState::new(customers, orders, tiers, policy);
/// let app = membership_router().with_state(app_state);
/// ```
pub fn membership_router() -> Router<MembershipAppState> {
    Router::new().nest("/api", membership_routes())
}
