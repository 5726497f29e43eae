use crate::enums::RiskTolerance;
use crate::value_objects::allocation::Allocation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Suggested capital allocation with its projected outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// Percentage-weighted mean APY of the allocations.
    pub expected_return: Decimal,
    pub risk_level: RiskTolerance,
    /// Investment compounded at `expected_return` over the horizon.
    pub projected_value: Decimal,
    pub allocations: Vec<Allocation>,
    pub insights: String,
}
