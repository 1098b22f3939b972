//! Domain error types.

use thiserror::Error;

/// Failure of a backing store (database or in-memory table).
///
/// Callers treat this as opaque; the core never retries.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors surfaced by domain services.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Caller input failed a precondition.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }
}

impl From<validator::ValidationError> for DomainError {
    fn from(err: validator::ValidationError) -> Self {
        DomainError::Validation(shared::validation::message_of(&err))
    }
}
