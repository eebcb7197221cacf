//! Error handling - maps application failures to RFC 7807 responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use penmaster_shared::ErrorResponse;
use std::fmt;

/// Application-level error type for handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<penmaster_core::error::RepoError> for AppError {
    fn from(err: penmaster_core::error::RepoError) -> Self {
        match err {
            penmaster_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            penmaster_core::error::RepoError::Unavailable(msg)
            | penmaster_core::error::RepoError::Operation(msg) => {
                tracing::error!("Store error: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
        }
    }
}

impl From<penmaster_core::error::DomainError> for AppError {
    fn from(err: penmaster_core::error::DomainError) -> Self {
        match err {
            penmaster_core::error::DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            penmaster_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
            penmaster_core::error::DomainError::Duplicate(msg) => AppError::Conflict(msg),
            penmaster_core::error::DomainError::Unauthorized => AppError::Unauthorized,
            penmaster_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
