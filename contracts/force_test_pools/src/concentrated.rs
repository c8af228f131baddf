use force_dex_interface::math::mul_div_u128;
use force_dex_interface::sqrt_price::{
    validate_price_limit, MAX_SQRT_PRICE_X64, MIN_SQRT_PRICE_X64, Q64,
};
use force_dex_interface::{sort_tokens, ConcentratedPoolInterface};
use force_errors::ContractError;
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, token::TokenClient, Address, Env,
    Symbol,
};

/// Fee denominator: one pip is a hundredth of a basis point.
const PIPS: u128 = 1_000_000;

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Token0,
    Token1,
    FeePips,
    SqrtPrice,
    Liquidity,
    Reserve0,
    Reserve1,
}

fn read_token(e: &Env, key: &DataKey) -> Address {
    e.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::NotInitialized))
}

fn read_u128(e: &Env, key: &DataKey) -> u128 {
    e.storage().instance().get(key).unwrap_or(0)
}

fn read_reserve(e: &Env, key: &DataKey) -> i128 {
    e.storage().instance().get(key).unwrap_or(0)
}

fn balance_of(e: &Env, token: &Address) -> i128 {
    TokenClient::new(e, token).balance(&e.current_contract_address())
}

fn to_u128(v: i128) -> Result<u128, ContractError> {
    u128::try_from(v).map_err(|_| ContractError::Overflow)
}

fn to_i128(v: u128) -> Result<i128, ContractError> {
    i128::try_from(v).map_err(|_| ContractError::Overflow)
}

/// Price after `amount_in` of token 0 enters a single range of liquidity `l`
/// at price `p`, and the token 1 paid out.
fn step_zero_for_one(l: u128, p: u128, amount_in: u128) -> Result<(u128, u128), ContractError> {
    let delta = mul_div_u128(amount_in, p, Q64)?;
    let denominator = l.checked_add(delta).ok_or(ContractError::Overflow)?;
    let next = mul_div_u128(l, p, denominator)?;
    let out = mul_div_u128(l, p - next, Q64)?;
    Ok((next, out))
}

/// Price after `amount_in` of token 1 enters, and the token 0 paid out.
fn step_one_for_zero(l: u128, p: u128, amount_in: u128) -> Result<(u128, u128), ContractError> {
    let next = p
        .checked_add(mul_div_u128(amount_in, Q64, l)?)
        .ok_or(ContractError::Overflow)?;
    let scaled = mul_div_u128(l, next - p, next)?;
    let out = mul_div_u128(scaled, Q64, p)?;
    Ok((next, out))
}

/// Single-range concentrated-liquidity pool. Swaps are exact-input and the
/// input must be transferred to the pool before `swap` is called.
#[contract]
pub struct ReferenceConcentratedPool;

#[contractimpl]
impl ReferenceConcentratedPool {
    pub fn __constructor(e: Env, token_a: Address, token_b: Address, fee_pips: u32) {
        if fee_pips as u128 >= PIPS {
            panic_with_error!(&e, ContractError::OutOfRange);
        }
        let (token_0, token_1) =
            sort_tokens(&token_a, &token_b).unwrap_or_else(|err| panic_with_error!(&e, err));
        e.storage().instance().set(&DataKey::Token0, &token_0);
        e.storage().instance().set(&DataKey::Token1, &token_1);
        e.storage().instance().set(&DataKey::FeePips, &fee_pips);
    }

    /// Set the active price and liquidity and adopt the current token
    /// balances as reserves.
    pub fn initialize(e: Env, sqrt_price_x64: u128, liquidity: u128) {
        if sqrt_price_x64 <= MIN_SQRT_PRICE_X64 || sqrt_price_x64 >= MAX_SQRT_PRICE_X64 {
            panic_with_error!(&e, ContractError::OutOfRange);
        }
        let reserve_0 = balance_of(&e, &read_token(&e, &DataKey::Token0));
        let reserve_1 = balance_of(&e, &read_token(&e, &DataKey::Token1));
        e.storage().instance().set(&DataKey::SqrtPrice, &sqrt_price_x64);
        e.storage().instance().set(&DataKey::Liquidity, &liquidity);
        e.storage().instance().set(&DataKey::Reserve0, &reserve_0);
        e.storage().instance().set(&DataKey::Reserve1, &reserve_1);
    }

    pub fn liquidity(e: Env) -> u128 {
        read_u128(&e, &DataKey::Liquidity)
    }

    pub fn fee_pips(e: Env) -> u32 {
        e.storage().instance().get(&DataKey::FeePips).unwrap_or(0)
    }

    pub fn get_reserves(e: Env) -> (i128, i128) {
        (
            read_reserve(&e, &DataKey::Reserve0),
            read_reserve(&e, &DataKey::Reserve1),
        )
    }
}

#[contractimpl]
impl ConcentratedPoolInterface for ReferenceConcentratedPool {
    fn token_0(e: Env) -> Address {
        read_token(&e, &DataKey::Token0)
    }

    fn token_1(e: Env) -> Address {
        read_token(&e, &DataKey::Token1)
    }

    fn sqrt_price_x64(e: Env) -> u128 {
        read_u128(&e, &DataKey::SqrtPrice)
    }

    fn swap(
        e: Env,
        recipient: Address,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x64: u128,
    ) -> Result<(i128, i128), ContractError> {
        if amount_specified <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        let liquidity = read_u128(&e, &DataKey::Liquidity);
        if liquidity == 0 {
            return Err(ContractError::InsufficientLiquidity);
        }
        let price = read_u128(&e, &DataKey::SqrtPrice);
        validate_price_limit(price, sqrt_price_limit_x64, zero_for_one)?;

        let (key_in, key_out, reserve_in_key, reserve_out_key) = if zero_for_one {
            (DataKey::Token0, DataKey::Token1, DataKey::Reserve0, DataKey::Reserve1)
        } else {
            (DataKey::Token1, DataKey::Token0, DataKey::Reserve1, DataKey::Reserve0)
        };
        let token_in = read_token(&e, &key_in);
        let token_out = read_token(&e, &key_out);
        let reserve_in = read_reserve(&e, &reserve_in_key);
        let reserve_out = read_reserve(&e, &reserve_out_key);

        let balance_in = balance_of(&e, &token_in);
        if balance_in - reserve_in < amount_specified {
            return Err(ContractError::InsufficientInput);
        }

        let fee_pips: u32 = e.storage().instance().get(&DataKey::FeePips).unwrap_or(0);
        let amount_less_fee =
            mul_div_u128(to_u128(amount_specified)?, PIPS - fee_pips as u128, PIPS)?;

        let (next_price, amount_out) = if zero_for_one {
            let (next, out) = step_zero_for_one(liquidity, price, amount_less_fee)?;
            if next < sqrt_price_limit_x64 {
                return Err(ContractError::PriceLimitExceeded);
            }
            (next, out)
        } else {
            let (next, out) = step_one_for_zero(liquidity, price, amount_less_fee)?;
            if next > sqrt_price_limit_x64 {
                return Err(ContractError::PriceLimitExceeded);
            }
            (next, out)
        };

        let amount_out = to_i128(amount_out)?;
        if amount_out == 0 {
            return Err(ContractError::InsufficientOutputAmount);
        }
        if amount_out > reserve_out {
            return Err(ContractError::InsufficientLiquidity);
        }

        TokenClient::new(&e, &token_out).transfer(
            &e.current_contract_address(),
            &recipient,
            &amount_out,
        );

        e.storage().instance().set(&reserve_in_key, &balance_in);
        e.storage().instance().set(&reserve_out_key, &(reserve_out - amount_out));
        e.storage().instance().set(&DataKey::SqrtPrice, &next_price);

        let deltas = if zero_for_one {
            (amount_specified, -amount_out)
        } else {
            (-amount_out, amount_specified)
        };
        e.events().publish(
            (Symbol::new(&e, "pool_swap"), recipient),
            (deltas.0, deltas.1, next_price),
        );
        Ok(deltas)
    }
}
