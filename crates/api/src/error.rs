//! API error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use defi_yield_data::DataError;
use defi_yield_domain::DomainError;
use defi_yield_optimization::StrategyError;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by API handlers and the server bootstrap.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request parameters.
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// No route or resource matched.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Strategy pipeline failure.
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    /// Stand-alone calculation failure (impermanent loss).
    #[error(transparent)]
    Calculation(#[from] DomainError),
    /// Data provider failure.
    #[error(transparent)]
    Data(#[from] DataError),
    /// Invalid server configuration.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Socket or listener failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: u16,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Strategy(e) => domain_status(e.cause()),
            Self::Calculation(e) => domain_status(e),
            Self::Data(DataError::InvalidQuery(_)) => StatusCode::BAD_REQUEST,
            Self::Data(_) | Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn domain_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        DomainError::InvalidState(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = Json(ErrorBody {
            error: self.to_string(),
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use defi_yield_optimization::PipelineStage;

    #[test]
    fn test_strategy_errors_map_by_cause() {
        let bad_input = ApiError::from(StrategyError::at(PipelineStage::Validation)(
            DomainError::invalid_input("amount"),
        ));
        assert_eq!(bad_input.status(), StatusCode::BAD_REQUEST);

        let bad_state = ApiError::from(StrategyError::at(PipelineStage::Allocation)(
            DomainError::invalid_state("zero scores"),
        ));
        assert_eq!(bad_state.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_data_errors() {
        let query = ApiError::from(DataError::InvalidQuery("empty".into()));
        assert_eq!(query.status(), StatusCode::BAD_REQUEST);

        let io = ApiError::from(DataError::Io(std::io::Error::other("disk")));
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
