use defi_yield_domain::DomainError;
use thiserror::Error;

/// Errors raised while querying or loading yield data.
#[derive(Debug, Error)]
pub enum DataError {
    /// The query cannot be answered as stated.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    /// A catalog record violates a domain invariant.
    #[error("Invalid catalog record: {0}")]
    InvalidRecord(#[from] DomainError),
    /// The catalog file could not be read.
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog file is not valid JSON.
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DataResult<T> = Result<T, DataError>;
