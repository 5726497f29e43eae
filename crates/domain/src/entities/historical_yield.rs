use crate::enums::AssetType;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single daily yield observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPoint {
    pub date: NaiveDate,
    #[serde(rename = "yield")]
    pub yield_pct: Decimal,
    pub asset_name: String,
    pub asset_type: AssetType,
}

/// Yield history of one asset at one protocol, oldest point first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalYield {
    pub protocol_id: String,
    pub protocol_name: String,
    pub data: Vec<YieldPoint>,
}

impl HistoricalYield {
    /// Yield values in chronological order.
    #[must_use]
    pub fn values(&self) -> Vec<Decimal> {
        self.data.iter().map(|p| p.yield_pct).collect()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&YieldPoint> {
        self.data.last()
    }
}
