//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! State is read-only during request handling. Nothing about a user's
//! session lives here: login state travels in the JWT and progress history
//! travels with each request.

use crate::auth::{JwtService, PasswordService};
use crate::config::AppConfig;
use crate::repositories::CredentialRepository;
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone across async tasks.
#[derive(Clone)]
pub struct AppState {
    /// Flat-file credential store
    pub credentials: Arc<CredentialRepository>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
}

impl AppState {
    /// Create a new application state
    ///
    /// JWT keys are derived here, once, from the configured secret.
    pub fn new(config: &AppConfig) -> Self {
        let credentials = CredentialRepository::new(
            config.storage.users_file.clone(),
            PasswordService::new(config.auth.scheme),
        );
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry_secs);

        Self {
            credentials: Arc::new(credentials),
            jwt,
        }
    }

    #[inline]
    pub fn credentials(&self) -> &Arc<CredentialRepository> {
        &self.credentials
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
