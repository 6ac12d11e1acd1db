//! Progress tracking routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ProgressService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use weight_goal_shared::types::{ProgressSummaryRequest, ProgressSummaryResponse};

pub fn progress_routes() -> Router<AppState> {
    Router::new().route("/summary", post(summary))
}

/// Summarize client-held weigh-ins (requires login)
///
/// POST /api/v1/progress/summary
async fn summary(
    _auth_user: AuthUser,
    Json(req): Json<ProgressSummaryRequest>,
) -> ApiResult<Json<ProgressSummaryResponse>> {
    Ok(Json(ProgressService::summarize(req)?))
}
