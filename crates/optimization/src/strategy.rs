//! End-to-end strategy pipeline: rank, allocate, project.

use crate::allocation::allocate;
use crate::error::{PipelineStage, StrategyError, StrategyResult};
use crate::projection::{project, validate_investment};
use crate::ranker::rank_opportunities;
use defi_yield_domain::entities::YieldOpportunity;
use defi_yield_domain::enums::RiskTolerance;
use defi_yield_domain::value_objects::Strategy;
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Builds the suggested allocation for a catalog of opportunities.
///
/// Pure and synchronous, so concurrent callers need no coordination.
///
/// # Errors
/// Any stage failure is wrapped in [`StrategyError::Calculation`] together
/// with the stage that produced it.
pub fn calculate_optimal_strategy(
    opportunities: &[YieldOpportunity],
    investment_amount: Decimal,
    horizon_months: u32,
    tolerance: RiskTolerance,
) -> StrategyResult<Strategy> {
    let result = run_pipeline(opportunities, investment_amount, horizon_months, tolerance);
    match &result {
        Ok(strategy) => info!(
            tolerance = %tolerance,
            candidates = opportunities.len(),
            allocations = strategy.allocations.len(),
            expected_return = %strategy.expected_return,
            "Calculated optimal strategy"
        ),
        Err(e) => warn!(stage = %e.stage(), error = %e.cause(), "Strategy calculation failed"),
    }
    result
}

fn run_pipeline(
    opportunities: &[YieldOpportunity],
    investment_amount: Decimal,
    horizon_months: u32,
    tolerance: RiskTolerance,
) -> StrategyResult<Strategy> {
    validate_investment(investment_amount, horizon_months)
        .map_err(StrategyError::at(PipelineStage::Validation))?;

    let ranked = rank_opportunities(opportunities, tolerance)
        .map_err(StrategyError::at(PipelineStage::Ranking))?;

    let allocations =
        allocate(&ranked, tolerance).map_err(StrategyError::at(PipelineStage::Allocation))?;

    project(allocations, investment_amount, horizon_months, tolerance)
        .map_err(StrategyError::at(PipelineStage::Projection))
}
