//! Domain errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Requested entity (or its parent) does not exist.
    /// Carries the localized message shown to the caller.
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
