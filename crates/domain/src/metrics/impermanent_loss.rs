use crate::error::{DomainError, DomainResult};
use crate::math;
use crate::value_objects::ImpermanentLossResult;
use rust_decimal::Decimal;

/// Calculates Impermanent Loss for a constant product pool from the relative
/// price move alone.
/// formula: 2 * sqrt(price_ratio) / (1 + price_ratio) - 1
///
/// # Arguments
///
/// * `price_ratio` - New price divided by entry price
///
/// # Returns
///
/// * `Decimal` - The impermanent loss as a negative fraction (e.g., -0.0572 for 5.72% loss)
pub fn il_from_price_ratio(price_ratio: Decimal) -> DomainResult<Decimal> {
    if price_ratio <= Decimal::ZERO {
        return Err(DomainError::invalid_input(format!(
            "price ratio must be positive, got {price_ratio}"
        )));
    }
    let numerator = math::checked_mul(Decimal::TWO, math::sqrt(price_ratio)?)?;
    let denominator = math::checked_add(Decimal::ONE, price_ratio)?;
    Ok(math::checked_div(numerator, denominator)? - Decimal::ONE)
}

/// Moves a two-token constant-product position to a new price and compares
/// the rebalanced pool share against simply holding the tokens.
///
/// # Arguments
///
/// * `token1_amount` - Amount of the base token deposited
/// * `token2_amount` - Amount of the quote token deposited
/// * `price_change_ratio` - Relative price move of token1 in token2, `0.5` for +50%
///
/// # Errors
///
/// Returns [`DomainError::InvalidInput`] when an amount is not positive or
/// the ratio is `<= -1` (the new price would not be positive), and
/// [`DomainError::InvalidState`] when the amounts are so far apart in
/// magnitude that a price, the pool invariant or a value leaves the decimal
/// range.
pub fn compute_impermanent_loss(
    token1_amount: Decimal,
    token2_amount: Decimal,
    price_change_ratio: Decimal,
) -> DomainResult<ImpermanentLossResult> {
    if token1_amount <= Decimal::ZERO {
        return Err(DomainError::invalid_input(format!(
            "token1 amount must be positive, got {token1_amount}"
        )));
    }
    if token2_amount <= Decimal::ZERO {
        return Err(DomainError::invalid_input(format!(
            "token2 amount must be positive, got {token2_amount}"
        )));
    }
    if price_change_ratio <= Decimal::NEGATIVE_ONE {
        return Err(DomainError::invalid_input(format!(
            "price change ratio must be greater than -1, got {price_change_ratio}"
        )));
    }

    let initial_price = math::checked_div(token2_amount, token1_amount)?;
    let k = math::checked_mul(token1_amount, token2_amount)?;
    let new_price = math::checked_mul(
        initial_price,
        math::checked_add(Decimal::ONE, price_change_ratio)?,
    )?;
    if new_price.is_zero() {
        return Err(DomainError::invalid_state(format!(
            "new price rounds to zero for initial price {initial_price}"
        )));
    }

    // Pool composition after arbitrage restores x * y = k at the new price.
    let token1_new_amount = math::sqrt(math::checked_div(k, new_price)?)?;
    let token2_new_amount = math::sqrt(math::checked_mul(k, new_price)?)?;

    let hold_value = math::checked_add(math::checked_mul(token1_amount, new_price)?, token2_amount)?;
    let lp_value = math::checked_add(
        math::checked_mul(token1_new_amount, new_price)?,
        token2_new_amount,
    )?;

    let impermanent_loss = math::checked_sub(lp_value, hold_value)?;
    let impermanent_loss_percent =
        math::checked_mul(math::checked_div(impermanent_loss, hold_value)?, Decimal::ONE_HUNDRED)?.abs();

    Ok(ImpermanentLossResult {
        token1_initial_amount: token1_amount,
        token2_initial_amount: token2_amount,
        token1_new_amount,
        token2_new_amount,
        initial_price,
        new_price,
        price_change_percent: math::checked_mul(price_change_ratio, Decimal::ONE_HUNDRED)?,
        hold_value,
        lp_value,
        impermanent_loss,
        impermanent_loss_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn close(a: Decimal, b: Decimal, tol: Decimal) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_il_from_price_ratio() {
        // Price doubles: 100 -> 200. Ratio = 2.
        // IL = 2*sqrt(2)/(1+2) - 1 = 2*1.4142/3 - 1 = 0.9428 - 1 = -0.0572 (5.72%)
        let il = il_from_price_ratio(dec!(2)).unwrap();
        assert!(close(il, dec!(-0.05719), dec!(0.0001)));
        assert!(il_from_price_ratio(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_zero_change_is_identity() {
        for (a, b) in [(dec!(1), dec!(2000)), (dec!(3.5), dec!(12)), (dec!(1000), dec!(0.25))] {
            let result = compute_impermanent_loss(a, b, Decimal::ZERO).unwrap();
            assert!(close(result.impermanent_loss_percent, Decimal::ZERO, dec!(0.000001)));
            assert!(close(result.hold_value, result.lp_value, dec!(0.000001)));
        }
    }

    #[test]
    fn test_fifty_percent_increase() {
        let result = compute_impermanent_loss(dec!(1), dec!(2000), dec!(0.5)).unwrap();
        assert!(close(result.impermanent_loss_percent, dec!(2.02), dec!(0.1)));
        assert!(result.hold_value > result.lp_value);
        assert_eq!(result.price_change_percent, dec!(50));
        assert!(close(result.new_price, dec!(3000), dec!(0.00001)));
    }

    #[test]
    fn test_fifty_percent_decrease_is_not_mirror_of_increase() {
        let down = compute_impermanent_loss(dec!(1), dec!(2000), dec!(-0.5)).unwrap();
        let up = compute_impermanent_loss(dec!(1), dec!(2000), dec!(0.5)).unwrap();
        // A halving is the reciprocal of a doubling, not of a +50% move.
        assert!(close(down.impermanent_loss_percent, dec!(5.72), dec!(0.01)));
        assert!(down.hold_value > down.lp_value);
        assert!(down.impermanent_loss_percent > up.impermanent_loss_percent);
        assert_eq!(down.price_change_percent, dec!(-50));
    }

    #[test]
    fn test_reciprocal_moves_have_equal_loss() {
        let doubled = compute_impermanent_loss(dec!(1), dec!(2000), dec!(1)).unwrap();
        let halved = compute_impermanent_loss(dec!(1), dec!(2000), dec!(-0.5)).unwrap();
        assert!(close(
            doubled.impermanent_loss_percent,
            halved.impermanent_loss_percent,
            dec!(0.000001)
        ));
    }

    #[test]
    fn test_extreme_price_change() {
        let result = compute_impermanent_loss(dec!(1), dec!(2000), dec!(4)).unwrap();
        assert!(result.impermanent_loss_percent > dec!(5));
        assert!(close(result.impermanent_loss_percent, dec!(25.46), dec!(0.01)));
    }

    #[test]
    fn test_constant_product_conserved() {
        for ratio in [dec!(-0.9), dec!(-0.5), dec!(0.5), dec!(3), dec!(10)] {
            let result = compute_impermanent_loss(dec!(1), dec!(2000), ratio).unwrap();
            let new_k = result.token1_new_amount * result.token2_new_amount;
            assert!(close(new_k, dec!(2000), dec!(0.00001)), "ratio {ratio}: k = {new_k}");
        }
    }

    #[test]
    fn test_scale_invariance() {
        let base = compute_impermanent_loss(dec!(1), dec!(2000), dec!(0.5)).unwrap();
        for k in [dec!(2), dec!(0.5), dec!(1000)] {
            let scaled = compute_impermanent_loss(dec!(1) * k, dec!(2000) * k, dec!(0.5)).unwrap();
            assert!(close(
                base.impermanent_loss_percent,
                scaled.impermanent_loss_percent,
                dec!(0.00001)
            ));
        }
    }

    #[test]
    fn test_matches_price_ratio_formula() {
        let result = compute_impermanent_loss(dec!(4), dec!(10), dec!(0.8)).unwrap();
        let closed_form = il_from_price_ratio(dec!(1.8)).unwrap();
        assert!(close(
            result.impermanent_loss_percent,
            closed_form.abs() * dec!(100),
            dec!(0.00001)
        ));
    }

    #[test]
    fn test_out_of_range_amounts_are_invalid_state() {
        // k = 1e30 exceeds the decimal range.
        let err = compute_impermanent_loss(dec!(1e15), dec!(1e15), dec!(0.5)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
        // initial price = 1e10 / 1e-20
        let err = compute_impermanent_loss(dec!(1e-20), dec!(1e10), dec!(0.5)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
        let err = compute_impermanent_loss(dec!(1), dec!(1e28), dec!(100)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn test_large_amounts_within_range() {
        let result = compute_impermanent_loss(dec!(1e12), dec!(2e12), dec!(1)).unwrap();
        assert!(close(result.impermanent_loss_percent, dec!(5.72), dec!(0.01)));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(compute_impermanent_loss(Decimal::ZERO, dec!(1), dec!(0.1)).unwrap_err().is_invalid_input());
        assert!(compute_impermanent_loss(dec!(1), dec!(-1), dec!(0.1)).unwrap_err().is_invalid_input());
        assert!(compute_impermanent_loss(dec!(1), dec!(1), dec!(-1)).unwrap_err().is_invalid_input());
        assert!(compute_impermanent_loss(dec!(1), dec!(1), dec!(-2)).unwrap_err().is_invalid_input());
    }
}
