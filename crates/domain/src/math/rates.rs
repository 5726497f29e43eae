use super::{checked_add, checked_div, checked_mul, checked_sub, from_f64, powf, to_f64};
use crate::error::{DomainError, DomainResult};
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Converts an APR to the APY it compounds to over `periods` per year.
///
/// Both rates are percentages: `apr_to_apy(10, 12)` is about `10.47`.
pub fn apr_to_apy(apr_pct: Decimal, periods: u32) -> DomainResult<Decimal> {
    if periods == 0 {
        return Err(DomainError::invalid_input("compounding periods must be positive"));
    }
    let n = Decimal::from(periods);
    let growth = powf(checked_add(Decimal::ONE, apr_pct / HUNDRED / n)?, f64::from(periods))?;
    checked_mul(growth - Decimal::ONE, HUNDRED)
}

/// Inverse of [`apr_to_apy`].
pub fn apy_to_apr(apy_pct: Decimal, periods: u32) -> DomainResult<Decimal> {
    if periods == 0 {
        return Err(DomainError::invalid_input("compounding periods must be positive"));
    }
    let per_period = powf(checked_add(Decimal::ONE, apy_pct / HUNDRED)?, 1.0 / f64::from(periods))?;
    checked_mul(checked_mul(Decimal::from(periods), per_period - Decimal::ONE)?, HUNDRED)
}

/// Grows `principal` at an annual percentage rate over a horizon in months,
/// using a fractional-year exponent: `principal * (1 + r/100)^(months/12)`.
///
/// # Errors
/// `InvalidState` when the grown value leaves the decimal range.
pub fn compound_growth(principal: Decimal, annual_rate_pct: Decimal, months: u32) -> DomainResult<Decimal> {
    let base = checked_add(Decimal::ONE, annual_rate_pct / HUNDRED)?;
    let factor = powf(base, f64::from(months) / MONTHS_PER_YEAR)?;
    checked_mul(principal, factor)
}

/// Future value of a principal plus a fixed contribution each compounding
/// period.
///
/// # Arguments
///
/// * `principal` - Initial investment
/// * `contribution` - Amount added every period
/// * `annual_rate_pct` - Annual rate as a percentage
/// * `years` - Investment duration in years
/// * `periods_per_year` - Compounding frequency (12 for monthly)
pub fn future_value(
    principal: Decimal,
    contribution: Decimal,
    annual_rate_pct: Decimal,
    years: Decimal,
    periods_per_year: u32,
) -> DomainResult<Decimal> {
    if periods_per_year == 0 {
        return Err(DomainError::invalid_input("compounding periods must be positive"));
    }
    if years.is_sign_negative() && !years.is_zero() {
        return Err(DomainError::invalid_input("years must be non-negative"));
    }
    let periods = to_f64(checked_mul(years, Decimal::from(periods_per_year))?)?;

    if annual_rate_pct.is_zero() {
        return checked_add(principal, checked_mul(contribution, from_f64(periods)?)?);
    }

    let periodic_rate = annual_rate_pct / HUNDRED / Decimal::from(periods_per_year);
    let growth = powf(checked_add(Decimal::ONE, periodic_rate)?, periods)?;
    let principal_fv = checked_mul(principal, growth)?;
    let annuity = checked_div(checked_sub(growth, Decimal::ONE)?, periodic_rate)?;
    checked_add(principal_fv, checked_mul(contribution, annuity)?)
}
