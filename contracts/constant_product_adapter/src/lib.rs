#![no_std]

//! # Constant-Product Adapter
//!
//! Implements [`DexAdapterInterface`] on top of an `x * y = k` pair registry.
//!
//! A swap resolves the pair through the router, quotes the output from the
//! pair's reserves with the 0.3 % fee, moves the input from `from` straight
//! into the pair and asks the pair to pay the quoted output to `recipient`.
//! The pair re-checks the invariant against its balances, so a stale quote
//! fails instead of overpaying.

mod events;

use force_dex_interface::math::get_amount_out;
use force_dex_interface::{
    flatten_swap_result, require_input_available, sort_tokens, ConstantProductPairClient,
    ConstantProductRouterClient, DexAdapterInterface,
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

/// A resolved pair with reserves oriented to the swap direction.
struct Route {
    pair: Address,
    input_is_token_0: bool,
    reserve_in: i128,
    reserve_out: i128,
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

fn resolve(e: &Env, token_in: &Address, token_out: &Address) -> Result<Route, ContractError> {
    sort_tokens(token_in, token_out)?;
    let router = ConstantProductRouterClient::new(e, &read_router(e));
    let pair = router
        .pair_for(token_in, token_out)
        .ok_or(ContractError::RouteUnavailable)?;

    let client = ConstantProductPairClient::new(e, &pair);
    let input_is_token_0 = client.token_0() == *token_in;
    let (reserve_0, reserve_1) = client.get_reserves();
    let (reserve_in, reserve_out) = if input_is_token_0 {
        (reserve_0, reserve_1)
    } else {
        (reserve_1, reserve_0)
    };
    Ok(Route {
        pair,
        input_is_token_0,
        reserve_in,
        reserve_out,
    })
}

fn quote(route: &Route, amount_in: i128) -> Result<i128, ContractError> {
    let amount_out = get_amount_out(amount_in, route.reserve_in, route.reserve_out)?;
    if amount_out == 0 {
        return Err(ContractError::InsufficientOutputAmount);
    }
    Ok(amount_out)
}

#[contract]
pub struct ConstantProductAdapter;

#[contractimpl]
impl ConstantProductAdapter {
    pub fn __constructor(e: Env, router: Address) {
        e.storage().instance().set(&DataKey::Router, &router);
        e.storage()
            .instance()
            .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
    }

    /// Output `swap` would deliver for `amount_in` at the pair's current
    /// reserves.
    pub fn get_amount_out(
        e: Env,
        amount_in: i128,
        token_in: Address,
        token_out: Address,
    ) -> Result<i128, ContractError> {
        if amount_in <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        let route = resolve(&e, &token_in, &token_out)?;
        quote(&route, amount_in)
    }
}

#[contractimpl]
impl DexAdapterInterface for ConstantProductAdapter {
    fn swap(
        e: Env,
        from: Address,
        amount_in: i128,
        recipient: Address,
        token_in: Address,
        token_out: Address,
    ) -> Result<i128, ContractError> {
        from.require_auth();
        if amount_in <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        let route = resolve(&e, &token_in, &token_out)?;
        require_input_available(&e, &token_in, &from, amount_in)?;
        let amount_out = quote(&route, amount_in)?;

        TokenClient::new(&e, &token_in).transfer_from(
            &e.current_contract_address(),
            &from,
            &route.pair,
            &amount_in,
        );

        let (amount_0_out, amount_1_out) = if route.input_is_token_0 {
            (0, amount_out)
        } else {
            (amount_out, 0)
        };
        let pair = ConstantProductPairClient::new(&e, &route.pair);
        flatten_swap_result(pair.try_swap(&amount_0_out, &amount_1_out, &recipient))?;

        events::emit_swap(
            &e,
            &recipient,
            &route.pair,
            &token_in,
            &token_out,
            amount_in,
            amount_out,
        );
        Ok(amount_out)
    }

    fn get_router(e: Env) -> Address {
        read_router(&e)
    }
}

#[cfg(test)]
mod test_helpers;
