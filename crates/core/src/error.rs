//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant maps to exactly one transport status at the API edge, so
/// handlers never have to guess how a failure should surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested record does not exist.
    #[error("not found")]
    NotFound,

    /// The caller passed an explicitly illegal argument (e.g. a missing id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value failed validation (e.g. unknown sort field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation requires an authenticated identity.
    #[error("authentication required")]
    Unauthenticated,

    /// Credentials presented at login did not match.
    #[error("authentication failed")]
    AuthenticationFailed,
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
