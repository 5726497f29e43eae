//! Request and response bodies.

use crate::error::{ApiError, ApiResult};
use defi_yield_data::YieldQuery;
use defi_yield_domain::enums::{AssetType, RiskTolerance, Scenario, Timeframe};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Query string for `/api/yields` and `/api/historical-yields`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldParams {
    /// Comma separated protocol ids.
    pub protocols: Option<String>,
    pub asset_type: Option<String>,
    pub timeframe: Option<String>,
}

impl YieldParams {
    /// Converts to a provider query, using `default_timeframe` when absent.
    pub fn to_query(&self, default_timeframe: Timeframe) -> ApiResult<YieldQuery> {
        let protocols = self
            .protocols
            .as_deref()
            .ok_or_else(|| ApiError::BadRequest("protocols parameter is required".to_string()))?;
        let timeframe = match self.timeframe.as_deref() {
            Some(raw) => raw.parse::<Timeframe>()?,
            None => default_timeframe,
        };
        Ok(YieldQuery::from_csv(protocols)
            .with_asset_type(parse_asset_filter(self.asset_type.as_deref())?)
            .with_timeframe(timeframe))
    }
}

/// Query string for `/api/projected-returns`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionParams {
    pub protocols: Option<String>,
    pub scenario: Option<String>,
    pub asset_type: Option<String>,
}

impl ProjectionParams {
    pub fn protocol_ids(&self) -> ApiResult<Vec<String>> {
        let raw = self
            .protocols
            .as_deref()
            .ok_or_else(|| ApiError::BadRequest("protocols parameter is required".to_string()))?;
        Ok(YieldQuery::from_csv(raw).protocol_ids)
    }

    pub fn scenario(&self) -> ApiResult<Scenario> {
        Ok(match self.scenario.as_deref() {
            Some(raw) => raw.parse()?,
            None => Scenario::default(),
        })
    }

    pub fn asset_type(&self) -> ApiResult<Option<AssetType>> {
        parse_asset_filter(self.asset_type.as_deref())
    }
}

/// Body of `POST /api/optimal-strategy`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalStrategyRequest {
    pub protocols: Vec<String>,
    pub investment_amount: Decimal,
    /// Horizon in months.
    pub time_horizon: u32,
    pub risk_tolerance: String,
    #[serde(default)]
    pub asset_type: Option<String>,
}

impl OptimalStrategyRequest {
    pub fn tolerance(&self) -> ApiResult<RiskTolerance> {
        Ok(self.risk_tolerance.parse()?)
    }

    pub fn query(&self) -> ApiResult<YieldQuery> {
        Ok(YieldQuery::new(self.protocols.iter().cloned())
            .with_asset_type(parse_asset_filter(self.asset_type.as_deref())?))
    }
}

/// Body of `POST /api/impermanent-loss`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpermanentLossRequest {
    pub token1_amount: Decimal,
    pub token2_amount: Decimal,
    /// Relative price move of token1, e.g. `-0.5` for a halving.
    pub price_change_ratio: Decimal,
}

/// `"all"` or an empty value means no filter.
fn parse_asset_filter(raw: Option<&str>) -> ApiResult<Option<AssetType>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => Ok(Some(v.parse()?)),
    }
}
