//! Yield data providers.
//!
//! This crate supplies the catalog the strategy engine works on:
//! - The [`YieldDataProvider`] trait consumed by the API and CLI
//! - A built-in static catalog of protocols, yields and projections
//! - Loading an externally supplied catalog from JSON
//! - Deterministic synthetic yield history

/// Error types.
pub mod error;
/// Built-in catalog tables.
pub mod fixtures;
/// Synthetic historical yield series.
pub mod history;
/// Provider implementations.
pub mod providers;
/// Query types.
pub mod query;

pub use error::{DataError, DataResult};
pub use providers::{StaticCatalog, load_json_catalog};
pub use query::YieldQuery;

use async_trait::async_trait;
use defi_yield_domain::entities::{HistoricalYield, ProjectedReturn, Protocol, YieldOpportunity};
use defi_yield_domain::enums::{AssetType, Scenario};

/// Source of protocols and yield data.
#[async_trait]
pub trait YieldDataProvider: Send + Sync {
    /// All supported protocols.
    async fn protocols(&self) -> DataResult<Vec<Protocol>>;

    /// Current yield opportunities matching the query.
    async fn yields(&self, query: &YieldQuery) -> DataResult<Vec<YieldOpportunity>>;

    /// Daily yield history over the query's timeframe.
    async fn historical_yields(&self, query: &YieldQuery) -> DataResult<Vec<HistoricalYield>>;

    /// Projected APY paths for a market scenario.
    async fn projected_returns(
        &self,
        protocol_ids: &[String],
        scenario: Scenario,
        asset_type: Option<AssetType>,
    ) -> DataResult<Vec<ProjectedReturn>>;
}
