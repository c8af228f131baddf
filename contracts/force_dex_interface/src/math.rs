//! Overflow-safe arithmetic helpers for swap and settlement calculations.
//!
//! All functions use checked arithmetic and return a `ContractError` on
//! overflow or division by zero, so callers can propagate with `?`.

use force_errors::ContractError;

/// Constant-product swap fee numerator (0.3 % fee).
pub const FEE_NUMERATOR: i128 = 997;
/// Constant-product swap fee denominator.
pub const FEE_DENOMINATOR: i128 = 1_000;

#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    if b == 0 {
        return Err(ContractError::DivisionByZero);
    }
    a.checked_div(b).ok_or(ContractError::Overflow)
}

/// `a * b / denominator` on unsigned 128-bit values.
#[inline]
pub fn mul_div_u128(a: u128, b: u128, denominator: u128) -> Result<u128, ContractError> {
    if denominator == 0 {
        return Err(ContractError::DivisionByZero);
    }
    a.checked_mul(b)
        .map(|n| n / denominator)
        .ok_or(ContractError::Overflow)
}

/// Output of a constant-product swap after the 0.3 % fee:
/// `amount_in*997*reserve_out / (reserve_in*1000 + amount_in*997)`.
///
/// This is exactly `floor(amount_in*0.997*reserve_out / (reserve_in + amount_in*0.997))`.
pub fn get_amount_out(
    amount_in: i128,
    reserve_in: i128,
    reserve_out: i128,
) -> Result<i128, ContractError> {
    if amount_in <= 0 {
        return Err(ContractError::ZeroAmount);
    }
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(ContractError::InsufficientLiquidity);
    }
    let amount_in_with_fee = mul_i128(amount_in, FEE_NUMERATOR)?;
    let numerator = mul_i128(amount_in_with_fee, reserve_out)?;
    let denominator = add_i128(mul_i128(reserve_in, FEE_DENOMINATOR)?, amount_in_with_fee)?;
    div_i128(numerator, denominator)
}

/// `floor(amount * rate / scale)` for non-negative inputs.
pub fn scale_i128(amount: i128, rate: u32, scale: i128) -> Result<i128, ContractError> {
    div_i128(mul_i128(amount, rate as i128)?, scale)
}
