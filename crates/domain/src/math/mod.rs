//! Numeric utilities shared by the engines.
//!
//! Values are carried as [`Decimal`]. Irrational operations (square roots,
//! fractional powers) go through `f64` and come back, and a non-finite or
//! unrepresentable intermediate is reported as [`DomainError::InvalidState`].
//! The `checked_*` helpers do the same for plain arithmetic that leaves the
//! decimal range.

pub mod rates;
pub mod statistics;

use crate::error::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Converts a decimal to `f64`.
pub fn to_f64(value: Decimal) -> DomainResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| DomainError::invalid_state(format!("cannot represent {value} as f64")))
}

/// Converts a finite `f64` back to a decimal.
pub fn from_f64(value: f64) -> DomainResult<Decimal> {
    if !value.is_finite() {
        return Err(DomainError::invalid_state(format!(
            "non-finite intermediate value {value}"
        )));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| DomainError::invalid_state(format!("{value} overflows decimal range")))
}

/// Square root of a non-negative decimal.
pub fn sqrt(value: Decimal) -> DomainResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(DomainError::invalid_input(format!(
            "square root of negative value {value}"
        )));
    }
    from_f64(to_f64(value)?.sqrt())
}

/// `base ^ exponent` for a positive base.
pub fn powf(base: Decimal, exponent: f64) -> DomainResult<Decimal> {
    if base <= Decimal::ZERO {
        return Err(DomainError::invalid_input(format!(
            "power base must be positive, got {base}"
        )));
    }
    from_f64(to_f64(base)?.powf(exponent))
}

fn out_of_range(op: &str, lhs: Decimal, rhs: Decimal) -> DomainError {
    DomainError::invalid_state(format!("{op} of {lhs} and {rhs} is out of decimal range"))
}

/// `lhs + rhs`.
pub fn checked_add(lhs: Decimal, rhs: Decimal) -> DomainResult<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| out_of_range("sum", lhs, rhs))
}

/// `lhs - rhs`.
pub fn checked_sub(lhs: Decimal, rhs: Decimal) -> DomainResult<Decimal> {
    lhs.checked_sub(rhs).ok_or_else(|| out_of_range("difference", lhs, rhs))
}

/// `lhs * rhs`.
pub fn checked_mul(lhs: Decimal, rhs: Decimal) -> DomainResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| out_of_range("product", lhs, rhs))
}

/// `lhs / rhs`. Division by zero is reported like an overflow.
pub fn checked_div(lhs: Decimal, rhs: Decimal) -> DomainResult<Decimal> {
    lhs.checked_div(rhs).ok_or_else(|| out_of_range("quotient", lhs, rhs))
}
