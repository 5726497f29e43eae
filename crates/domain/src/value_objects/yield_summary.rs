use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Descriptive statistics of a historical yield series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldSummary {
    pub mean: Decimal,
    /// Population standard deviation of the daily yields.
    pub volatility: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub latest: Decimal,
    pub observations: usize,
}
