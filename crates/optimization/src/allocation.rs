//! Distributes capital across the top-ranked opportunities.
//!
//! Each risk tolerance selects a number of opportunities and one of four
//! weighting policies. Every policy yields percentages summing to 100 for a
//! non-empty selection.

use defi_yield_domain::enums::RiskTolerance;
use defi_yield_domain::value_objects::{Allocation, ConcentratedOpportunity, ScoredOpportunity};
use defi_yield_domain::{DomainError, DomainResult};
use rust_decimal::Decimal;
use tracing::debug;

const HALF: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// How selected opportunities share the capital.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightingPolicy {
    /// `100 / n` each, regardless of score.
    EqualWeight,
    /// Flat `50 / n` plus a score-proportional share of the other 50.
    MixedWeight,
    /// Proportional to score.
    ScoreWeight,
    /// Proportional to score squared.
    ConcentratedWeight,
}

impl WeightingPolicy {
    #[must_use]
    pub fn for_tolerance(tolerance: RiskTolerance) -> Self {
        match tolerance {
            RiskTolerance::Low => Self::EqualWeight,
            RiskTolerance::Moderate => Self::MixedWeight,
            RiskTolerance::High => Self::ScoreWeight,
            RiskTolerance::Aggressive => Self::ConcentratedWeight,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::EqualWeight => "equal-weight",
            Self::MixedWeight => "mixed-weight",
            Self::ScoreWeight => "score-weight",
            Self::ConcentratedWeight => "concentrated-weight",
        }
    }

    /// Assigns percentages to an already selected subset.
    ///
    /// # Errors
    /// `InvalidState` when a proportional policy has nothing to divide by.
    pub fn weigh(&self, selected: &[ScoredOpportunity]) -> DomainResult<Vec<Allocation>> {
        if selected.is_empty() {
            return Ok(Vec::new());
        }
        match self {
            Self::EqualWeight => Ok(equal_weight(selected)),
            Self::MixedWeight => Ok(mixed_weight(selected)),
            Self::ScoreWeight => score_weight(selected),
            Self::ConcentratedWeight => concentrated_weight(selected),
        }
    }
}

/// Number of top-ranked opportunities kept for a tolerance.
#[must_use]
pub fn selection_width(tolerance: RiskTolerance, available: usize) -> usize {
    let width = match tolerance {
        RiskTolerance::Low => 6,
        RiskTolerance::Moderate => 4,
        RiskTolerance::High => 3,
        RiskTolerance::Aggressive => 2,
    };
    width.min(available)
}

/// Selects the top of a ranked list and weights it for the tolerance.
///
/// An empty ranking yields an empty allocation set.
pub fn allocate(ranked: &[ScoredOpportunity], tolerance: RiskTolerance) -> DomainResult<Vec<Allocation>> {
    let width = selection_width(tolerance, ranked.len());
    let policy = WeightingPolicy::for_tolerance(tolerance);
    let allocations = policy.weigh(&ranked[..width])?;

    debug!(
        tolerance = %tolerance,
        policy = policy.name(),
        selected = width,
        available = ranked.len(),
        "Allocated capital"
    );
    Ok(allocations)
}

fn equal_weight(selected: &[ScoredOpportunity]) -> Vec<Allocation> {
    let share = Decimal::ONE_HUNDRED / Decimal::from(selected.len());
    selected
        .iter()
        .map(|s| Allocation::for_opportunity(&s.opportunity, share))
        .collect()
}

fn mixed_weight(selected: &[ScoredOpportunity]) -> Vec<Allocation> {
    let total: Decimal = selected.iter().map(|s| s.score).sum();
    if total.is_zero() {
        // No score signal to split the top-up by; both halves go flat.
        return equal_weight(selected);
    }
    let base = HALF / Decimal::from(selected.len());
    selected
        .iter()
        .map(|s| Allocation::for_opportunity(&s.opportunity, base + HALF * (s.score / total)))
        .collect()
}

fn score_weight(selected: &[ScoredOpportunity]) -> DomainResult<Vec<Allocation>> {
    let total: Decimal = selected.iter().map(|s| s.score).sum();
    if total.is_zero() {
        return Err(DomainError::invalid_state(
            "score-weight allocation needs at least one positive score",
        ));
    }
    Ok(selected
        .iter()
        .map(|s| Allocation::for_opportunity(&s.opportunity, Decimal::ONE_HUNDRED * (s.score / total)))
        .collect())
}

fn concentrated_weight(selected: &[ScoredOpportunity]) -> DomainResult<Vec<Allocation>> {
    let concentrated: Vec<ConcentratedOpportunity> =
        selected.iter().map(ScoredOpportunity::concentrate).collect();
    let total: Decimal = concentrated.iter().map(|c| c.concentrated_score).sum();
    if total.is_zero() {
        return Err(DomainError::invalid_state(
            "concentrated-weight allocation needs at least one positive score",
        ));
    }
    Ok(concentrated
        .iter()
        .map(|c| {
            Allocation::for_opportunity(
                &c.scored.opportunity,
                Decimal::ONE_HUNDRED * (c.concentrated_score / total),
            )
        })
        .collect())
}
