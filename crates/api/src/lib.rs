//! REST API server and endpoints.
//!
//! This crate exposes the yield dashboard over HTTP/JSON:
//! - Protocol and yield catalog lookups
//! - Historical yields and scenario projections
//! - Optimal strategy calculation
//! - Impermanent loss calculation

/// Prelude module for convenient imports.
pub mod prelude;

/// Error types.
pub mod error;
/// Request handlers.
pub mod handlers;
/// API request/response models.
pub mod models;
/// Route definitions.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Application state.
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::{ApiServer, ServerConfig};
pub use state::AppState;
