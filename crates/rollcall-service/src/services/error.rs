//! Service layer error type

use rollcall_common::AppError;
use rollcall_core::DomainError;
use std::fmt;
use thiserror::Error;

/// Failure of a roster, attendance or auth operation
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Rule violation or repository failure raised below the service
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Credential, token or hashing failure
    #[error(transparent)]
    App(#[from] AppError),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Input the service refuses; the message is shown to the client
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// HTTP status for the response
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_not_found() => 404,
            // Duplicate emails count as bad input
            Self::Domain(e) if e.is_validation() || e.is_conflict() => 400,
            Self::Domain(_) => 500,
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
        }
    }

    /// Machine-readable code for the response
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
