//! Input validation functions
//!
//! This module provides validation utilities for form input.
//! Request DTOs additionally use the `validator` crate derive macros.

use crate::errors::AuthError;

/// Longest username accepted at registration
pub const MAX_USERNAME_LEN: usize = 64;

/// Validate a username for registration or login
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err("Username too long".to_string());
    }
    if username.contains(['\n', '\r']) {
        return Err("Username cannot contain line breaks".to_string());
    }
    Ok(())
}

/// Validate a password is present
///
/// No strength policy is applied.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    Ok(())
}

/// Check the password and its confirmation match
pub fn validate_password_confirmation(password: &str, confirm: &str) -> Result<(), AuthError> {
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }
    Ok(())
}

/// Validate a strictly positive measurement (weight, height, age)
pub fn validate_positive(field: &str, value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", field));
    }
    if value <= 0.0 {
        return Err(format!("{} must be greater than zero", field));
    }
    Ok(())
}
