use crate::enums::{AssetType, Scenario};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Projected APY at fixed horizons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projections {
    pub month1: Decimal,
    pub month3: Decimal,
    pub month6: Decimal,
    pub month12: Decimal,
}

/// Forward-looking APY path for one asset under one market scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedReturn {
    pub protocol_id: String,
    pub protocol_name: String,
    pub asset_name: String,
    pub asset_type: AssetType,
    pub scenario: Scenario,
    pub current_apy: Decimal,
    pub projections: Projections,
}
