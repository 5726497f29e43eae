use defi_yield_domain::entities::YieldOpportunity;
use defi_yield_domain::enums::{RiskLevel, RiskTolerance};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// APY above this percentage saturates the yield component of the score.
pub const APY_NORMALIZATION_CAP: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

const MAX_RISK_ORDINAL: u8 = 5;

/// Scoring rule the ranker sorts opportunities by.
pub trait ObjectiveFunction {
    /// Score of a single opportunity, higher is better.
    fn evaluate(&self, opportunity: &YieldOpportunity) -> Decimal;
    /// Orders two opportunities by their scores.
    fn compare(&self, a: &YieldOpportunity, b: &YieldOpportunity) -> Ordering {
        self.evaluate(a)
            .partial_cmp(&self.evaluate(b))
            .unwrap_or(Ordering::Equal)
    }
}

/// Blend of normalized yield and normalized safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub apy_weight: Decimal,
    pub risk_weight: Decimal,
}

impl ScoringWeights {
    #[must_use]
    pub fn for_tolerance(tolerance: RiskTolerance) -> Self {
        let (apy, risk) = match tolerance {
            RiskTolerance::Low => (3, 7),
            RiskTolerance::Moderate => (5, 5),
            RiskTolerance::High => (7, 3),
            RiskTolerance::Aggressive => (9, 1),
        };
        Self {
            apy_weight: Decimal::new(apy, 1),
            risk_weight: Decimal::new(risk, 1),
        }
    }
}

/// Scores an opportunity in `[0, 1]` from its APY and risk level.
#[derive(Debug, Clone, Copy)]
pub struct RiskAdjustedYield {
    pub weights: ScoringWeights,
}

impl RiskAdjustedYield {
    #[must_use]
    pub fn for_tolerance(tolerance: RiskTolerance) -> Self {
        Self {
            weights: ScoringWeights::for_tolerance(tolerance),
        }
    }

    /// `min(apy / 30, 1)`, so extreme yields cannot dominate the score.
    #[must_use]
    pub fn normalized_apy(apy: Decimal) -> Decimal {
        (apy / APY_NORMALIZATION_CAP).min(Decimal::ONE).max(Decimal::ZERO)
    }

    /// `(5 - ordinal) / 4`: very-low risk scores 1, very-high scores 0.
    #[must_use]
    pub fn normalized_risk(level: RiskLevel) -> Decimal {
        let headroom = MAX_RISK_ORDINAL - level.ordinal();
        Decimal::from(headroom) / Decimal::from(MAX_RISK_ORDINAL - 1)
    }
}

impl ObjectiveFunction for RiskAdjustedYield {
    fn evaluate(&self, opportunity: &YieldOpportunity) -> Decimal {
        self.weights.apy_weight * Self::normalized_apy(opportunity.apy)
            + self.weights.risk_weight * Self::normalized_risk(opportunity.risk_level)
    }
}
