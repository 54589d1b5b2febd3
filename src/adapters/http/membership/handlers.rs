//! HTTP handlers for membership endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::membership::{
    GetMemberInfoHandler, GetMemberInfoQuery, ListMemberLevelsHandler, ListMemberLevelsQuery,
    UpdateConsumptionCommand, UpdateConsumptionHandler, UpdateMemberLevelCommand,
    UpdateMemberLevelHandler,
};
use crate::domain::foundation::{CustomerId, ErrorCode, Timestamp};
use crate::domain::membership::{MembershipError, SpendPolicy, TierTable};
use crate::ports::{CustomerRepository, OrderReader};

use super::dto::{
    ConsumptionUpdateResponse, ErrorResponse, HealthResponse, LevelUpdateResponse,
    MemberInfoResponse, MemberLevelsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct MembershipAppState {
    pub customers: Arc<dyn CustomerRepository>,
    pub orders: Arc<dyn OrderReader>,
    pub tiers: Arc<TierTable>,
    pub spend_policy: SpendPolicy,
}

impl MembershipAppState {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        orders: Arc<dyn OrderReader>,
        tiers: Arc<TierTable>,
        spend_policy: SpendPolicy,
    ) -> Self {
        Self {
            customers,
            orders,
            tiers,
            spend_policy,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn member_info_handler(&self) -> GetMemberInfoHandler {
        GetMemberInfoHandler::new(self.customers.clone(), self.tiers.clone())
    }

    pub fn member_levels_handler(&self) -> ListMemberLevelsHandler {
        ListMemberLevelsHandler::new(self.tiers.clone())
    }

    pub fn update_level_handler(&self) -> UpdateMemberLevelHandler {
        UpdateMemberLevelHandler::new(self.customers.clone(), self.tiers.clone())
    }

    pub fn update_consumption_handler(&self) -> UpdateConsumptionHandler {
        UpdateConsumptionHandler::new(
            self.customers.clone(),
            self.orders.clone(),
            self.tiers.clone(),
            self.spend_policy,
        )
    }
}

/// Parses the `{id}` path segment into a customer id.
fn parse_customer_id(raw: &str) -> Result<CustomerId, MembershipError> {
    raw.parse::<CustomerId>().map_err(MembershipError::from)
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/customer/{id}/member-info - Membership card for a customer
pub async fn get_member_info(
    State(state): State<MembershipAppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let customer_id = parse_customer_id(&raw_id)?;
    let handler = state.member_info_handler();

    let info = handler
        .handle(GetMemberInfoQuery { customer_id })
        .await?
        .ok_or(MembershipError::customer_not_found(customer_id))?;

    Ok(Json(MemberInfoResponse::from_info(&info, &Timestamp::now())))
}

/// GET /api/member/levels - All configured tiers
pub async fn get_member_levels(State(state): State<MembershipAppState>) -> impl IntoResponse {
    let levels = state.member_levels_handler().handle(ListMemberLevelsQuery);
    Json(MemberLevelsResponse::from(levels))
}

/// GET /api/health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/customer/{id}/update-level - Re-resolve tier from stored spend
pub async fn update_member_level(
    State(state): State<MembershipAppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let customer_id = parse_customer_id(&raw_id)?;
    let handler = state.update_level_handler();

    let update = handler
        .handle(UpdateMemberLevelCommand { customer_id })
        .await?
        .ok_or(MembershipError::customer_not_found(customer_id))?;

    Ok(Json(LevelUpdateResponse::from_update(
        customer_id.value(),
        &update,
    )))
}

/// POST /api/customer/{id}/update-consumption - Recompute spend from orders, then tier
pub async fn update_consumption(
    State(state): State<MembershipAppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let customer_id = parse_customer_id(&raw_id)?;
    let handler = state.update_consumption_handler();

    let update = handler
        .handle(UpdateConsumptionCommand { customer_id })
        .await?
        .ok_or(MembershipError::customer_not_found(customer_id))?;

    Ok(Json(ConsumptionUpdateResponse::from_update(
        customer_id.value(),
        &update,
    )))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for converting domain errors to HTTP responses.
#[derive(Debug)]
pub struct MembershipApiError(MembershipError);

impl From<MembershipError> for MembershipApiError {
    fn from(err: MembershipError) -> Self {
        Self(err)
    }
}

impl IntoResponse for MembershipApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            MembershipError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            MembershipError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            MembershipError::InvalidTierTable(_) | MembershipError::Infrastructure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "membership request failed");
            // Don't leak store details to clients.
            let body = ErrorResponse::new(ErrorCode::InternalError.to_string(), "Internal server error");
            return (status, Json(body)).into_response();
        }

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}
