//! Turns an allocation set into a projected strategy.

use crate::insights::{EnglishInsights, InsightWriter, NarrativeTemplate, generate_insights};
use defi_yield_domain::enums::RiskTolerance;
use defi_yield_domain::math::{self, rates};
use defi_yield_domain::value_objects::{Allocation, Strategy};
use defi_yield_domain::{DomainError, DomainResult};
use rust_decimal::Decimal;
use tracing::debug;

/// Percentage-weighted mean APY, `Σ apy · pct / 100`.
///
/// # Errors
/// `InvalidState` when an APY is too large to weight.
pub fn expected_return(allocations: &[Allocation]) -> DomainResult<Decimal> {
    allocations.iter().try_fold(Decimal::ZERO, |acc, a| {
        let weighted = math::checked_mul(a.expected_apy, a.percentage)? / Decimal::ONE_HUNDRED;
        math::checked_add(acc, weighted)
    })
}

/// Checks the investment amount and horizon.
pub fn validate_investment(investment_amount: Decimal, horizon_months: u32) -> DomainResult<()> {
    if investment_amount <= Decimal::ZERO {
        return Err(DomainError::invalid_input(format!(
            "investment amount must be positive, got {investment_amount}"
        )));
    }
    if horizon_months == 0 {
        return Err(DomainError::invalid_input("time horizon must be at least one month"));
    }
    Ok(())
}

/// Projects a strategy with the default English narrative.
pub fn project(
    allocations: Vec<Allocation>,
    investment_amount: Decimal,
    horizon_months: u32,
    tolerance: RiskTolerance,
) -> DomainResult<Strategy> {
    project_with(&EnglishInsights, allocations, investment_amount, horizon_months, tolerance)
}

/// Projects a strategy, rendering insights through `writer`.
///
/// An empty allocation set projects to zero return and an unchanged
/// investment.
///
/// # Errors
/// `InvalidInput` for a non-positive amount or zero horizon, `InvalidState`
/// when the projected value leaves the decimal range.
pub fn project_with<W: InsightWriter + ?Sized>(
    writer: &W,
    allocations: Vec<Allocation>,
    investment_amount: Decimal,
    horizon_months: u32,
    tolerance: RiskTolerance,
) -> DomainResult<Strategy> {
    validate_investment(investment_amount, horizon_months)?;

    let expected_return = expected_return(&allocations)?;
    let projected_value = rates::compound_growth(investment_amount, expected_return, horizon_months)?;
    let insights = generate_insights(
        writer,
        NarrativeTemplate::from(tolerance),
        &allocations,
        horizon_months,
    );

    debug!(
        expected_return = %expected_return,
        projected_value = %projected_value,
        allocations = allocations.len(),
        "Projected strategy"
    );

    Ok(Strategy {
        expected_return,
        risk_level: tolerance,
        projected_value,
        allocations,
        insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn alloc(name: &str, pct: Decimal, apy: Decimal) -> Allocation {
        Allocation {
            protocol_id: name.to_lowercase(),
            protocol_name: name.to_string(),
            asset_name: "USDC".to_string(),
            percentage: pct,
            expected_apy: apy,
        }
    }

    #[test]
    fn test_expected_return_is_percentage_weighted() {
        let allocations = vec![alloc("Aave", dec!(75), dec!(4)), alloc("Yearn", dec!(25), dec!(12))];
        assert_eq!(expected_return(&allocations).unwrap(), dec!(6));
    }

    #[test]
    fn test_projection_compounds_over_horizon() {
        let allocations = vec![alloc("Aave", dec!(50), dec!(8)), alloc("Curve", dec!(50), dec!(12))];
        let strategy = project(allocations, dec!(10000), 24, RiskTolerance::Moderate).unwrap();
        assert_eq!(strategy.expected_return, dec!(10));
        // 10000 * 1.1^2
        assert!((strategy.projected_value - dec!(12100)).abs() < dec!(0.0001));
        assert_eq!(strategy.risk_level, RiskTolerance::Moderate);
        assert!(strategy.insights.starts_with("This balanced strategy"));
    }

    #[test]
    fn test_empty_allocations_project_flat() {
        let strategy = project(Vec::new(), dec!(5000), 6, RiskTolerance::High).unwrap();
        assert_eq!(strategy.expected_return, Decimal::ZERO);
        assert_eq!(strategy.projected_value, dec!(5000));
        assert!(strategy.allocations.is_empty());
    }

    #[test]
    fn test_rejects_bad_investment() {
        let allocations = vec![alloc("Aave", dec!(100), dec!(4))];
        assert!(project(allocations.clone(), Decimal::ZERO, 12, RiskTolerance::Low)
            .unwrap_err()
            .is_invalid_input());
        assert!(project(allocations, dec!(100), 0, RiskTolerance::Low)
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_overflow_is_invalid_state() {
        let allocations = vec![alloc("Aave", dec!(100), dec!(20))];
        let err = project(allocations, dec!(7e28), 120, RiskTolerance::Low).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));

        let absurd = vec![alloc("Moon", dec!(100), dec!(1e27))];
        assert!(matches!(expected_return(&absurd), Err(DomainError::InvalidState(_))));
    }

    struct Terse;

    impl InsightWriter for Terse {
        fn write(&self, template: NarrativeTemplate, ctx: &crate::insights::InsightContext<'_>) -> String {
            format!("{template:?}:{}", ctx.top.protocol_name)
        }

        fn write_empty(&self, _horizon_months: u32) -> String {
            "empty".to_string()
        }
    }

    #[test]
    fn test_custom_writer() {
        let allocations = vec![alloc("Aave", dec!(100), dec!(4))];
        let strategy = project_with(&Terse, allocations, dec!(100), 12, RiskTolerance::Aggressive).unwrap();
        assert_eq!(strategy.insights, "Aggressive:Aave");
    }
}
