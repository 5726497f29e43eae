//! Error types shared by the domain and the engines built on it.

use thiserror::Error;

/// Errors raised by domain calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed or out-of-domain argument.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Well-formed computation that hit an undefined numeric case.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Shorthand for [`DomainError::InvalidState`].
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Returns true for caller-side argument errors.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result alias for domain calculations.
pub type DomainResult<T> = Result<T, DomainError>;
