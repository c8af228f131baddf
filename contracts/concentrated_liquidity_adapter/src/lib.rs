#![no_std]

//! # Concentrated-Liquidity Adapter
//!
//! Implements [`DexAdapterInterface`] on top of pools priced by a Q64.64
//! square-root ratio.
//!
//! Swap direction follows the canonical token order: paying the lower-sorted
//! token is `zero_for_one` and pushes the price down, paying the other pushes
//! it up. `swap` lets the price run to the edge of the admissible range;
//! [`ConcentratedLiquidityAdapter::swap_with_price_limit`] stops it at a
//! caller-chosen bound.

mod events;

use force_dex_interface::sqrt_price::{default_price_limit, validate_price_limit};
use force_dex_interface::{
    flatten_swap_result, require_input_available, sort_tokens, ConcentratedPoolClient,
    ConcentratedRouterClient, DexAdapterInterface,
};
use force_errors::ContractError;
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, token::TokenClient, Address, Env,
};

const BUMP_THRESHOLD: u32 = 17_280;
const BUMP_TARGET: u32 = 518_400;

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Router,
}

fn read_router(e: &Env) -> Address {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
    e.storage()
        .instance()
        .get(&DataKey::Router)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::NotInitialized))
}

fn execute(
    e: &Env,
    from: &Address,
    amount_in: i128,
    recipient: &Address,
    token_in: &Address,
    token_out: &Address,
    sqrt_price_limit_x64: Option<u128>,
) -> Result<i128, ContractError> {
    from.require_auth();
    if amount_in <= 0 {
        return Err(ContractError::ZeroAmount);
    }
    let (token_0, _) = sort_tokens(token_in, token_out)?;
    let zero_for_one = *token_in == token_0;

    let router = ConcentratedRouterClient::new(e, &read_router(e));
    let pool = router
        .pool_by_pair(token_in, token_out)
        .ok_or(ContractError::RouteUnavailable)?;
    let client = ConcentratedPoolClient::new(e, &pool);

    let limit = match sqrt_price_limit_x64 {
        Some(limit) => {
            validate_price_limit(client.sqrt_price_x64(), limit, zero_for_one)?;
            limit
        }
        None => default_price_limit(zero_for_one),
    };

    require_input_available(e, token_in, from, amount_in)?;
    TokenClient::new(e, token_in).transfer_from(
        &e.current_contract_address(),
        from,
        &pool,
        &amount_in,
    );

    let (amount_0, amount_1) =
        flatten_swap_result(client.try_swap(recipient, &zero_for_one, &amount_in, &limit))?;
    let delta_out = if zero_for_one { amount_1 } else { amount_0 };
    let amount_out = delta_out.checked_neg().ok_or(ContractError::Overflow)?;
    if amount_out <= 0 {
        return Err(ContractError::InsufficientOutputAmount);
    }

    events::emit_swap(
        e, recipient, &pool, token_in, token_out, amount_in, amount_out,
    );
    Ok(amount_out)
}

#[contract]
pub struct ConcentratedLiquidityAdapter;

#[contractimpl]
impl ConcentratedLiquidityAdapter {
    pub fn __constructor(e: Env, router: Address) {
        e.storage().instance().set(&DataKey::Router, &router);
        e.storage()
            .instance()
            .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
    }

    /// `swap` bounded by an explicit square-root price. The limit must lie
    /// strictly inside the admissible range and on the far side of the
    /// pool's current price, otherwise `InvalidPriceLimit`.
    pub fn swap_with_price_limit(
        e: Env,
        from: Address,
        amount_in: i128,
        recipient: Address,
        token_in: Address,
        token_out: Address,
        sqrt_price_limit_x64: u128,
    ) -> Result<i128, ContractError> {
        execute(
            &e,
            &from,
            amount_in,
            &recipient,
            &token_in,
            &token_out,
            Some(sqrt_price_limit_x64),
        )
    }
}

#[contractimpl]
impl DexAdapterInterface for ConcentratedLiquidityAdapter {
    fn swap(
        e: Env,
        from: Address,
        amount_in: i128,
        recipient: Address,
        token_in: Address,
        token_out: Address,
    ) -> Result<i128, ContractError> {
        execute(
            &e, &from, amount_in, &recipient, &token_in, &token_out, None,
        )
    }

    fn get_router(e: Env) -> Address {
        read_router(&e)
    }
}

#[cfg(test)]
mod test_helpers;
