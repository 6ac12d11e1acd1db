//! Error types for the Weight Goal Calculator

use thiserror::Error;

/// Message shown when the selected goal does not produce a caloric deficit
pub const NO_DEFICIT_MESSAGE: &str =
    "Your current goal doesn't involve weight loss. Please select 'Lose Weight' goal.";

/// Errors raised by the metrics engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{}", NO_DEFICIT_MESSAGE)]
    NoDeficit,
}

impl CalculationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CalculationError::InvalidInput(message.into())
    }
}

/// Credential and session error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username already exists")]
    AlreadyExists(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,
}
