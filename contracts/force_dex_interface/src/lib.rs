#![no_std]

//! # Force DEX Interface
//!
//! The one swap capability the sale contract depends on, plus the client
//! interfaces of the pools the two adapter variants delegate to.
//!
//! ## Adapter contract
//! `swap(from, amount_in, recipient, token_in, token_out) -> amount_out`
//!
//! - `from` authorizes the call and must have approved the adapter for
//!   `amount_in` of `token_in`. When `from` is the invoking contract the
//!   authorization is implicit.
//! - On success `amount_out` of `token_out` has been delivered to `recipient`.
//! - `InsufficientInput` and `RouteUnavailable` are returned verbatim so the
//!   caller can tell a funding problem from a missing pool.

pub mod math;
pub mod sqrt_price;

use force_errors::ContractError;
use soroban_sdk::{contractclient, token::TokenClient, Address, ConversionError, Env, InvokeError};

/// Shape of a `try_` client call whose callee returns `Result<T, ContractError>`.
/// `C` is the error of converting the returned value into `T`: `ConversionError`
/// for scalars, `soroban_sdk::Error` for tuples and other composite values.
pub type TryCallResult<T, C = ConversionError> =
    Result<Result<T, C>, Result<ContractError, InvokeError>>;

/// Uniform swap capability implemented by every DEX adapter.
#[contractclient(name = "DexAdapterClient")]
pub trait DexAdapterInterface {
    /// Swap `amount_in` of `token_in`, pulled from `from`, into `token_out`
    /// delivered to `recipient`. Returns the amount delivered.
    fn swap(
        env: Env,
        from: Address,
        amount_in: i128,
        recipient: Address,
        token_in: Address,
        token_out: Address,
    ) -> Result<i128, ContractError>;

    /// Router the adapter resolves pools through.
    fn get_router(env: Env) -> Address;
}

/// Pair registry of a constant-product DEX.
#[contractclient(name = "ConstantProductRouterClient")]
pub trait ConstantProductRouterInterface {
    fn pair_for(env: Env, token_a: Address, token_b: Address) -> Option<Address>;
}

/// Constant-product pair. Input is transferred to the pair before `swap`;
/// the pair checks the invariant against its balances.
#[contractclient(name = "ConstantProductPairClient")]
pub trait ConstantProductPairInterface {
    fn token_0(env: Env) -> Address;
    fn token_1(env: Env) -> Address;
    /// `(reserve_0, reserve_1)` in canonical token order.
    fn get_reserves(env: Env) -> (i128, i128);
    fn swap(
        env: Env,
        amount_0_out: i128,
        amount_1_out: i128,
        to: Address,
    ) -> Result<(), ContractError>;
}

/// Pool registry of a concentrated-liquidity DEX.
#[contractclient(name = "ConcentratedRouterClient")]
pub trait ConcentratedRouterInterface {
    fn pool_by_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address>;
}

/// Concentrated-liquidity pool priced by a Q64.64 square-root ratio.
#[contractclient(name = "ConcentratedPoolClient")]
pub trait ConcentratedPoolInterface {
    fn token_0(env: Env) -> Address;
    fn token_1(env: Env) -> Address;
    fn sqrt_price_x64(env: Env) -> u128;
    /// Exact-input swap of an amount already transferred to the pool.
    /// Returns `(amount_0, amount_1)`: positive was paid in, negative paid out.
    fn swap(
        env: Env,
        recipient: Address,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x64: u128,
    ) -> Result<(i128, i128), ContractError>;
}

/// Order two token addresses canonically (`token_0 < token_1`).
pub fn sort_tokens(
    token_a: &Address,
    token_b: &Address,
) -> Result<(Address, Address), ContractError> {
    if token_a == token_b {
        return Err(ContractError::IdenticalTokens);
    }
    if token_a < token_b {
        Ok((token_a.clone(), token_b.clone()))
    } else {
        Ok((token_b.clone(), token_a.clone()))
    }
}

/// Check that `from` holds `amount` of `token` and has approved the current
/// contract to spend it.
pub fn require_input_available(
    e: &Env,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let client = TokenClient::new(e, token);
    let spender = e.current_contract_address();
    if client.balance(from) < amount || client.allowance(from, &spender) < amount {
        return Err(ContractError::InsufficientInput);
    }
    Ok(())
}

/// Collapse a `try_` pool or adapter call: a `ContractError` raised by the
/// callee passes through unchanged, anything else (a trap, a foreign error
/// code, an undecodable return value) becomes `SwapFailed`.
pub fn flatten_swap_result<T, C>(result: TryCallResult<T, C>) -> Result<T, ContractError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        Ok(Err(_)) | Err(Err(_)) => Err(ContractError::SwapFailed),
    }
}
