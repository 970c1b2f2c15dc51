//! Application error types
//!
//! Failures of the shared infrastructure: credentials, tokens, hashing,
//! database bootstrap and configuration.

use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Token is required")]
    MissingAuth,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is invalid")]
    InvalidToken,

    /// The token verified but its user is gone
    #[error("User not found")]
    TokenUserNotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials
            | Self::MissingAuth
            | Self::TokenExpired
            | Self::InvalidToken
            | Self::TokenUserNotFound => 401,

            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingAuth => "MISSING_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenUserNotFound => "TOKEN_USER_NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Error envelope returned by the API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Body for server-side failures; the detail stays in the logs
    #[must_use]
    pub fn internal() -> Self {
        Self {
            message: "Internal server error".to_string(),
            code: "INTERNAL_ERROR".to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidCredentials.status_code(), 401);
        assert_eq!(AppError::TokenUserNotFound.status_code(), 401);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
        assert_eq!(AppError::Config("bind".to_string()).status_code(), 500);
    }

    #[test]
    fn test_token_errors_are_distinct() {
        let errors = [
            AppError::MissingAuth,
            AppError::TokenExpired,
            AppError::InvalidToken,
            AppError::TokenUserNotFound,
        ];

        for (i, a) in errors.iter().enumerate() {
            for b in &errors[i + 1..] {
                assert_ne!(a.to_string(), b.to_string());
                assert_ne!(a.error_code(), b.error_code());
            }
        }
    }

    #[test]
    fn test_internal_body_is_generic() {
        let body = serde_json::to_value(ErrorResponse::internal()).unwrap();

        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert!(body.get("details").is_none());
    }
}
