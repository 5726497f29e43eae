use crate::entities::YieldOpportunity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of capital assigned to one opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub protocol_id: String,
    pub protocol_name: String,
    pub asset_name: String,
    /// Percentage of total capital, 0..=100.
    pub percentage: Decimal,
    pub expected_apy: Decimal,
}

impl Allocation {
    #[must_use]
    pub fn for_opportunity(opportunity: &YieldOpportunity, percentage: Decimal) -> Self {
        Self {
            protocol_id: opportunity.protocol_id.clone(),
            protocol_name: opportunity.protocol_name.clone(),
            asset_name: opportunity.asset_name.clone(),
            percentage,
            expected_apy: opportunity.apy,
        }
    }

    /// Sum of percentages across a set of allocations.
    #[must_use]
    pub fn total_percentage(allocations: &[Allocation]) -> Decimal {
        allocations.iter().map(|a| a.percentage).sum()
    }

    /// Largest allocation, first one wins on ties.
    #[must_use]
    pub fn top(allocations: &[Allocation]) -> Option<&Allocation> {
        allocations
            .iter()
            .fold(None, |best: Option<&Allocation>, a| match best {
                Some(b) if b.percentage >= a.percentage => Some(b),
                _ => Some(a),
            })
    }
}
