//! Calculator routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::PlanService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use tracing::info;
use weight_goal_shared::types::{CalculateRequest, PlanResponse};

pub fn plan_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

/// Compute a weight loss plan (requires login)
///
/// POST /api/v1/plan/calculate
async fn calculate(
    auth_user: AuthUser,
    Json(req): Json<CalculateRequest>,
) -> ApiResult<Json<PlanResponse>> {
    let response = PlanService::calculate(&req)?;
    info!(username = %auth_user.username, "Weight loss plan calculated");
    Ok(Json(response))
}
