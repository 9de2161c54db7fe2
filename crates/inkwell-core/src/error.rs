//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
///
/// Mutations return `Result`, never a silent boolean: a failed write
/// surfaces here instead of being swallowed by the caller.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Blob-store errors. Deleting a path that does not exist is a no-op,
/// not an error; only real I/O failures surface here.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("I/O failure: {0}")]
    Io(String),

    #[error("Invalid blob path: {0}")]
    InvalidPath(String),
}
