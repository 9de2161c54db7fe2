//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use inkwell_shared::ErrorResponse;
use std::fmt;

use inkwell_core::validate::FieldError;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    Validation(Vec<String>),
}

impl AppError {
    /// Collapse field-level validation errors into a 422 response.
    pub fn from_field_errors(errors: Vec<FieldError>) -> Self {
        AppError::Validation(
            errors
                .into_iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect(),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Internal(detail) => {
                // Log internal errors; the caller only sees a generic failure
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
            AppError::Validation(errors) => {
                ErrorResponse::new(422, "Validation Failed").with_detail(errors.join(", "))
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<inkwell_core::error::DomainError> for AppError {
    fn from(err: inkwell_core::error::DomainError) -> Self {
        match err {
            inkwell_core::error::DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            inkwell_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
            inkwell_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<inkwell_core::error::RepoError> for AppError {
    fn from(err: inkwell_core::error::RepoError) -> Self {
        match err {
            inkwell_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            inkwell_core::error::RepoError::Constraint(msg) => {
                AppError::Internal(format!("Constraint violation: {}", msg))
            }
            inkwell_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            inkwell_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

// Blob-store failures are not handled by the controller; they surface as
// generic server errors.
impl From<inkwell_core::error::BlobError> for AppError {
    fn from(err: inkwell_core::error::BlobError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
