//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a temporary directory holding its credential file,
//! so tests never share users.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fake::{faker::internet::en::Username, Fake};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use weight_goal_backend::{
    auth::PasswordScheme,
    config::{AppConfig, AuthConfig, JwtConfig, ServerConfig, StorageConfig},
    routes,
    state::AppState,
};

pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub dir: TempDir,
}

impl TestApp {
    /// Create a new test application with an empty credential file location
    pub fn new() -> Self {
        Self::with_scheme(PasswordScheme::Sha256)
    }

    pub fn with_scheme(scheme: PasswordScheme) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = test_config(&dir, scheme);
        let app = routes::create_router(AppState::new(&config));
        Self { app, dir }
    }

    /// Path of the credential file backing this app
    pub fn users_file(&self) -> std::path::PathBuf {
        self.dir.path().join("users.csv")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None, None).await
    }

    /// Make a GET request with a Bearer token
    pub async fn get_with_token(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.send("GET", path, None, Some(token)).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body), None).await
    }

    /// Make a POST request with JSON body and a Bearer token
    pub async fn post_with_token(&self, path: &str, body: &str, token: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body), Some(token)).await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
        token: Option<&str>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(path);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Register a user with `TEST_PASSWORD`
    pub async fn register(&self, username: &str) -> StatusCode {
        self.register_with(username, TEST_PASSWORD).await
    }

    pub async fn register_with(&self, username: &str, password: &str) -> StatusCode {
        let body = json!({
            "username": username,
            "password": password,
            "confirm_password": password,
        });
        self.post("/api/v1/auth/register", &body.to_string()).await.0
    }

    /// Register a fresh random user, log in and return the access token
    pub async fn login_new_user(&self) -> String {
        let username = random_username();
        assert_eq!(self.register(&username).await, StatusCode::CREATED);

        let body = json!({ "username": username, "password": TEST_PASSWORD });
        let (status, response) = self.post("/api/v1/auth/login", &body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let response: Value = serde_json::from_str(&response).unwrap();
        response["access_token"].as_str().unwrap().to_string()
    }
}

pub fn random_username() -> String {
    Username().fake()
}

fn test_config(dir: &TempDir, scheme: PasswordScheme) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        storage: StorageConfig {
            users_file: dir.path().join("users.csv"),
        },
        auth: AuthConfig { scheme },
        jwt: JwtConfig {
            secret: "test-secret-key-for-testing-only-32chars".to_string(),
            access_token_expiry_secs: 3600,
        },
    }
}
