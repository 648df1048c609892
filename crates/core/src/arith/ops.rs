//! Primitive exact-decimal operations.
//!
//! Rounding here is half-up (`RoundingStrategy::MidpointAwayFromZero`),
//! the convention used on invoices and cost reports: 0.005 rounds to 0.01.

use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;

use super::error::ArithError;

/// Default scale for monetary results.
pub const MONEY_SCALE: u32 = 2;

/// Parses a string into an exact decimal.
///
/// Uses exact parsing: the value never round-trips through a binary
/// float, so `"0.1"` is exactly one tenth.
///
/// # Errors
///
/// Returns [`ArithError::InvalidNumericFormat`] if the input is not a
/// valid decimal literal.
pub fn parse_decimal(input: &str) -> Result<Decimal, ArithError> {
    Decimal::from_str_exact(input.trim()).map_err(|_| ArithError::InvalidNumericFormat {
        input: input.to_string(),
    })
}

/// Sums all values. Empty input yields zero.
#[must_use]
pub fn add(values: &[Decimal]) -> Decimal {
    values.iter().copied().sum()
}

/// Subtracts each of `rest` from `first`, left to right.
#[must_use]
pub fn subtract(first: Decimal, rest: &[Decimal]) -> Decimal {
    rest.iter().fold(first, |acc, v| acc - v)
}

/// Multiplies two values.
#[must_use]
pub fn multiply(a: Decimal, b: Decimal) -> Decimal {
    a * b
}

/// Divides `a` by `b`, rounding the quotient half-up to `scale`
/// fractional digits.
///
/// # Errors
///
/// Returns [`ArithError::DivisionByZero`] if `b` is zero.
pub fn divide(a: Decimal, b: Decimal, scale: u32) -> Result<Decimal, ArithError> {
    if b.is_zero() {
        return Err(ArithError::DivisionByZero);
    }
    Ok(round(a / b, scale))
}

/// Rounds half-up to `scale` fractional digits.
#[must_use]
pub fn round(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns true if the value is exactly zero.
#[must_use]
pub fn is_zero(value: Decimal) -> bool {
    value.is_zero()
}

/// Returns true if the value is strictly positive.
#[must_use]
pub fn is_positive(value: Decimal) -> bool {
    value > Decimal::ZERO
}

/// Returns true if the value is strictly negative.
#[must_use]
pub fn is_negative(value: Decimal) -> bool {
    value < Decimal::ZERO
}

/// Compares two values, returning `Less`, `Equal`, or `Greater`.
#[must_use]
pub fn compare(a: Decimal, b: Decimal) -> Ordering {
    a.cmp(&b)
}
