//! Q64.64 square-root price bounds and swap-direction helpers for
//! concentrated-liquidity pools.

use force_errors::ContractError;

/// `1.0` in Q64.64.
pub const Q64: u128 = 1 << 64;

/// Lowest square-root price a pool can reach (tick -443636).
pub const MIN_SQRT_PRICE_X64: u128 = 4_295_048_016;

/// Highest square-root price a pool can reach (tick 443636).
pub const MAX_SQRT_PRICE_X64: u128 = 79_226_673_515_401_279_992_447_579_055;

/// Price limit used when the caller supplies none: the swap may run to the
/// edge of the admissible range in its direction.
pub fn default_price_limit(zero_for_one: bool) -> u128 {
    if zero_for_one {
        MIN_SQRT_PRICE_X64 + 1
    } else {
        MAX_SQRT_PRICE_X64 - 1
    }
}

/// A zero-for-one swap lowers the price, so its limit must sit below the
/// current price; one-for-zero raises it, so the limit must sit above.
pub fn validate_price_limit(
    current_sqrt_price_x64: u128,
    sqrt_price_limit_x64: u128,
    zero_for_one: bool,
) -> Result<(), ContractError> {
    let admissible = if zero_for_one {
        sqrt_price_limit_x64 < current_sqrt_price_x64
            && sqrt_price_limit_x64 > MIN_SQRT_PRICE_X64
    } else {
        sqrt_price_limit_x64 > current_sqrt_price_x64
            && sqrt_price_limit_x64 < MAX_SQRT_PRICE_X64
    };
    if admissible {
        Ok(())
    } else {
        Err(ContractError::InvalidPriceLimit)
    }
}
