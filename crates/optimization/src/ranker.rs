//! Scores a catalog of yield opportunities and orders it best-first.

use crate::objective::{ObjectiveFunction, RiskAdjustedYield};
use defi_yield_domain::DomainResult;
use defi_yield_domain::entities::YieldOpportunity;
use defi_yield_domain::enums::RiskTolerance;
use defi_yield_domain::value_objects::ScoredOpportunity;
use tracing::debug;

/// Ranks opportunities for a risk tolerance, highest score first.
///
/// Ties keep their input order. An empty catalog ranks to an empty list.
///
/// # Errors
/// Returns `InvalidInput` if any opportunity has a negative APY or TVL.
pub fn rank_opportunities(
    opportunities: &[YieldOpportunity],
    tolerance: RiskTolerance,
) -> DomainResult<Vec<ScoredOpportunity>> {
    rank_with(opportunities, &RiskAdjustedYield::for_tolerance(tolerance))
}

/// Ranks opportunities with an arbitrary objective.
pub fn rank_with<O: ObjectiveFunction>(
    opportunities: &[YieldOpportunity],
    objective: &O,
) -> DomainResult<Vec<ScoredOpportunity>> {
    let mut scored = opportunities
        .iter()
        .map(|opp| {
            opp.validate()?;
            Ok(ScoredOpportunity::new(opp.clone(), objective.evaluate(opp)))
        })
        .collect::<DomainResult<Vec<_>>>()?;

    // sort_by is stable, so equal scores keep catalog order
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        count = scored.len(),
        top_score = ?scored.first().map(|s| s.score),
        "Ranked opportunities"
    );
    Ok(scored)
}
