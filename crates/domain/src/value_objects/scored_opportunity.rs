use crate::entities::YieldOpportunity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A yield opportunity annotated with its ranking score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredOpportunity {
    #[serde(flatten)]
    pub opportunity: YieldOpportunity,
    pub score: Decimal,
}

impl ScoredOpportunity {
    #[must_use]
    pub fn new(opportunity: YieldOpportunity, score: Decimal) -> Self {
        Self { opportunity, score }
    }

    /// Squares the score for concentrated weighting.
    #[must_use]
    pub fn concentrate(&self) -> ConcentratedOpportunity {
        ConcentratedOpportunity {
            scored: self.clone(),
            concentrated_score: self.score * self.score,
        }
    }
}

/// A scored opportunity carrying the super-linear weight used by
/// concentrated allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentratedOpportunity {
    pub scored: ScoredOpportunity,
    pub concentrated_score: Decimal,
}
