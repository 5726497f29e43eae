use super::StaticCatalog;
use crate::error::DataResult;
use defi_yield_domain::entities::{ProjectedReturn, Protocol, YieldOpportunity};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// On-disk catalog layout. Either a bare array of opportunities or an
/// object carrying protocols and projections alongside them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogDocument {
    Records(Vec<YieldOpportunity>),
    Full {
        #[serde(default)]
        protocols: Vec<Protocol>,
        yields: Vec<YieldOpportunity>,
        #[serde(default, rename = "projectedReturns")]
        projected_returns: Vec<ProjectedReturn>,
    },
}

impl CatalogDocument {
    /// Validates every record and builds the catalog.
    pub fn into_catalog(self) -> DataResult<StaticCatalog> {
        match self {
            Self::Records(yields) => StaticCatalog::from_opportunities(Vec::new(), yields, Vec::new()),
            Self::Full {
                protocols,
                yields,
                projected_returns,
            } => StaticCatalog::from_opportunities(protocols, yields, projected_returns),
        }
    }
}

/// Loads a catalog from a JSON file.
///
/// # Errors
/// Fails if the file cannot be read, is not a valid catalog document, or
/// contains a record with a negative APY or TVL.
pub async fn load_json_catalog(path: impl AsRef<Path>) -> DataResult<StaticCatalog> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await?;
    let document: CatalogDocument = serde_json::from_str(&raw)?;
    let catalog = document.into_catalog()?;
    info!(path = %path.display(), opportunities = catalog.len(), "Loaded yield catalog");
    Ok(catalog)
}
