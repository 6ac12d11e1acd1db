//! Registration and login
//!
//! Credential file access and hashing run on the blocking thread pool.
//! No lock is taken between the existence check and the write, so the
//! store's last-writer-wins behaviour is unchanged.

use crate::auth::JwtService;
use crate::error::ApiError;
use crate::repositories::{CredentialError, CredentialRepository};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;
use weight_goal_shared::types::{AuthTokens, LoginRequest, RegisterRequest};
use weight_goal_shared::validation::{
    validate_password, validate_password_confirmation, validate_username,
};
use weight_goal_shared::AuthError;

/// Run a blocking credential-store call off the async runtime
async fn run_blocking<T, E, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Task join error: {}", e)))?
        .map_err(Into::into)
}

/// Authentication operations
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(
        credentials: &Arc<CredentialRepository>,
        req: RegisterRequest,
    ) -> Result<(), ApiError> {
        req.validate()?;
        validate_username(&req.username).map_err(ApiError::Validation)?;
        validate_password(&req.password).map_err(ApiError::Validation)?;
        validate_password_confirmation(&req.password, &req.confirm_password)?;

        let repo = Arc::clone(credentials);
        let username = req.username.clone();
        let password = req.password;
        let result = run_blocking(move || repo.register(&username, &password)).await;

        match &result {
            Ok(()) => info!(username = %req.username, "User registered"),
            Err(ApiError::Conflict(_)) => {
                info!(username = %req.username, "Registration rejected: username taken")
            }
            Err(_) => {}
        }
        result
    }

    /// Check a username/password pair and issue a session token
    pub async fn login(
        credentials: &Arc<CredentialRepository>,
        jwt_service: &JwtService,
        req: LoginRequest,
    ) -> Result<AuthTokens, ApiError> {
        req.validate()
            .map_err(|_| ApiError::from(AuthError::InvalidCredentials))?;

        let repo = Arc::clone(credentials);
        let username = req.username.clone();
        let password = req.password;
        let valid = run_blocking(move || {
            repo.validate(&username, &password)
                .map_err(CredentialError::Storage)
        })
        .await?;

        if !valid {
            warn!(username = %req.username, "Login failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = jwt_service
            .generate_access_token(&req.username)
            .map_err(ApiError::Internal)?;

        info!(username = %req.username, "User logged in");
        Ok(AuthTokens {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.access_token_expiry_secs(),
            username: req.username,
        })
    }
}
