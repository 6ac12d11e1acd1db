//! Authentication routes
//!
//! Registration, login and the current-user lookup.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use weight_goal_shared::types::{
    AuthTokens, LoginRequest, MessageResponse, RegisterRequest, UserProfile,
};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_profile))
}

/// Register a new user
///
/// POST /api/v1/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    AuthService::register(state.credentials(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "You have successfully registered! Please log in.".to_string(),
        }),
    ))
}

/// Login with username and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = AuthService::login(state.credentials(), state.jwt(), req).await?;
    Ok(Json(tokens))
}

/// Get the logged-in user
///
/// GET /api/v1/auth/me
async fn get_profile(auth_user: AuthUser) -> Json<UserProfile> {
    Json(UserProfile {
        username: auth_user.username,
    })
}
