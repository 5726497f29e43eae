use super::{checked_add, checked_div, checked_mul, checked_sub, sqrt};
use crate::error::{DomainError, DomainResult};
use rust_decimal::Decimal;

fn checked_sum(values: impl IntoIterator<Item = DomainResult<Decimal>>) -> DomainResult<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| checked_add(acc, v?))
}

/// Arithmetic mean.
pub fn mean(values: &[Decimal]) -> DomainResult<Decimal> {
    if values.is_empty() {
        return Err(DomainError::invalid_input("mean of an empty series"));
    }
    let sum = checked_sum(values.iter().map(|v| Ok(*v)))?;
    Ok(sum / Decimal::from(values.len()))
}

/// `Σ v·w / Σ w`.
pub fn weighted_average(values: &[Decimal], weights: &[Decimal]) -> DomainResult<Decimal> {
    if values.len() != weights.len() {
        return Err(DomainError::invalid_input(format!(
            "{} values but {} weights",
            values.len(),
            weights.len()
        )));
    }
    if values.is_empty() {
        return Err(DomainError::invalid_input("weighted average of an empty series"));
    }
    let total_weight = checked_sum(weights.iter().map(|w| Ok(*w)))?;
    if total_weight.is_zero() {
        return Err(DomainError::invalid_state("weights sum to zero"));
    }
    let weighted = checked_sum(values.iter().zip(weights).map(|(v, w)| checked_mul(*v, *w)))?;
    checked_div(weighted, total_weight)
}

fn squared_deviation(value: Decimal, center: Decimal) -> DomainResult<Decimal> {
    let delta = checked_sub(value, center)?;
    checked_mul(delta, delta)
}

/// Population standard deviation.
pub fn standard_deviation(values: &[Decimal]) -> DomainResult<Decimal> {
    let avg = mean(values)?;
    let squares = checked_sum(values.iter().map(|v| squared_deviation(*v, avg)))?;
    sqrt(squares / Decimal::from(values.len()))
}

/// Root-mean-square of the shortfalls below `threshold`.
pub fn downside_deviation(values: &[Decimal], threshold: Decimal) -> DomainResult<Decimal> {
    if values.is_empty() {
        return Err(DomainError::invalid_input("downside deviation of an empty series"));
    }
    let squared = checked_sum(
        values
            .iter()
            .filter(|v| **v < threshold)
            .map(|v| squared_deviation(threshold, *v)),
    )?;
    sqrt(squared / Decimal::from(values.len()))
}

/// Pearson correlation coefficient of two equally long series.
pub fn correlation(xs: &[Decimal], ys: &[Decimal]) -> DomainResult<Decimal> {
    if xs.len() != ys.len() {
        return Err(DomainError::invalid_input(format!(
            "series lengths differ: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 2 {
        return Err(DomainError::invalid_input("correlation needs at least two points"));
    }
    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let mut covariance = Decimal::ZERO;
    let mut var_x = Decimal::ZERO;
    let mut var_y = Decimal::ZERO;
    for (x, y) in xs.iter().zip(ys) {
        let dx = checked_sub(*x, mean_x)?;
        let dy = checked_sub(*y, mean_y)?;
        covariance = checked_add(covariance, checked_mul(dx, dy)?)?;
        var_x = checked_add(var_x, checked_mul(dx, dx)?)?;
        var_y = checked_add(var_y, checked_mul(dy, dy)?)?;
    }

    if var_x.is_zero() || var_y.is_zero() {
        return Err(DomainError::invalid_state("correlation undefined for a constant series"));
    }
    checked_div(covariance, sqrt(checked_mul(var_x, var_y)?)?)
}

/// `(return - risk_free) / volatility`, zero when volatility is zero.
pub fn sharpe_ratio(
    expected_return: Decimal,
    risk_free_rate: Decimal,
    volatility: Decimal,
) -> DomainResult<Decimal> {
    if volatility.is_zero() {
        return Ok(Decimal::ZERO);
    }
    checked_div(checked_sub(expected_return, risk_free_rate)?, volatility)
}

/// Like [`sharpe_ratio`] but against downside deviation only.
pub fn sortino_ratio(
    expected_return: Decimal,
    risk_free_rate: Decimal,
    downside_deviation: Decimal,
) -> DomainResult<Decimal> {
    sharpe_ratio(expected_return, risk_free_rate, downside_deviation)
}
