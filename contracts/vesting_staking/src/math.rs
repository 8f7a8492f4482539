//! Overflow-safe arithmetic helpers for stake accounting.
//!
//! All functions use checked arithmetic and return `StakingError::Overflow`
//! instead of wrapping.

use staking_errors::StakingError;

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, StakingError> {
    a.checked_add(b).ok_or(StakingError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, StakingError> {
    a.checked_sub(b).ok_or(StakingError::Overflow)
}

/// Checked `u64` addition.
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, StakingError> {
    a.checked_add(b).ok_or(StakingError::Overflow)
}

/// Split `value * numerator / denominator` as
/// `(value / d) * n + (value % d) * n / d`, so the product never exceeds
/// `denominator * numerator`.
///
/// Returns `(quotient, remainder)` of the full division.
fn mul_div(value: i128, numerator: u64, denominator: i128) -> Result<(i128, i128), StakingError> {
    let numerator = numerator as i128;
    let whole_part = value
        .checked_div(denominator)
        .ok_or(StakingError::Overflow)?;
    let remainder_part = value
        .checked_rem(denominator)
        .ok_or(StakingError::Overflow)?;
    let head = whole_part
        .checked_mul(numerator)
        .ok_or(StakingError::Overflow)?;
    let tail = remainder_part
        .checked_mul(numerator)
        .ok_or(StakingError::Overflow)?;
    let quotient = add_i128(head, tail / denominator)?;
    Ok((quotient, tail % denominator))
}

/// `floor(value * numerator / denominator)` for non-negative operands.
#[inline]
pub fn mul_div_floor(value: i128, numerator: u64, denominator: i128) -> Result<i128, StakingError> {
    let (quotient, _) = mul_div(value, numerator, denominator)?;
    Ok(quotient)
}

/// `ceil(value * numerator / denominator)` for non-negative operands.
#[inline]
pub fn mul_div_ceil(value: i128, numerator: u64, denominator: i128) -> Result<i128, StakingError> {
    let (quotient, remainder) = mul_div(value, numerator, denominator)?;
    if remainder == 0 {
        Ok(quotient)
    } else {
        add_i128(quotient, 1)
    }
}
