//! HTTP adapter for membership endpoints.
//!
//! Exposes the tier pipeline via REST API:
//! - `GET /api/customer/:id/member-info` - Membership card for a customer
//! - `GET /api/member/levels` - Configured tiers
//! - `POST /api/customer/:id/update-level` - Re-resolve tier from stored spend
//! - `POST /api/customer/:id/update-consumption` - Recompute spend, then tier
//! - `GET /api/health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{MembershipApiError, MembershipAppState};
pub use routes::{membership_router, membership_routes};
