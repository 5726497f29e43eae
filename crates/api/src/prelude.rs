//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use defi_yield_api::prelude::*;
//! ```

pub use crate::error::{ApiError, ApiResult};
pub use crate::models::{
    HealthResponse, ImpermanentLossRequest, OptimalStrategyRequest, ProjectionParams, YieldParams,
};
pub use crate::routes::create_router;
pub use crate::server::{ApiServer, ServerConfig};
pub use crate::state::AppState;
