//! Shared test helpers for concentrated_liquidity_adapter tests.

use crate::{ConcentratedLiquidityAdapter, ConcentratedLiquidityAdapterClient};
use force_dex_interface::sort_tokens;
use force_dex_interface::sqrt_price::Q64;
use force_test_pools::testutils::{
    create_token, deploy_concentrated_pool, deploy_router, mint, DEFAULT_RESERVE,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

pub const TRADER_FUNDS: i128 = 1_000_000;

pub struct Setup<'a> {
    pub client: ConcentratedLiquidityAdapterClient<'a>,
    pub router: Address,
    pub pool: Address,
    /// Lower-sorted token: paying it is a zero-for-one swap.
    pub token_0: Address,
    pub token_1: Address,
    pub trader: Address,
}

/// Router with one pool at price 1.0 and deep liquidity, an adapter bound to
/// it, and a trader funded in both tokens who has not yet approved anything.
pub fn setup(e: &Env) -> Setup<'_> {
    e.mock_all_auths();

    let router = deploy_router(e);
    let token_a = create_token(e);
    let token_b = create_token(e);
    let pool = deploy_concentrated_pool(
        e,
        &router,
        &token_a,
        &token_b,
        DEFAULT_RESERVE,
        Q64,
        DEFAULT_RESERVE as u128,
    );
    let (token_0, token_1) = sort_tokens(&token_a, &token_b).unwrap();

    let adapter = e.register(ConcentratedLiquidityAdapter, (router.clone(),));
    let client = ConcentratedLiquidityAdapterClient::new(e, &adapter);

    let trader = Address::generate(e);
    mint(e, &token_0, &trader, TRADER_FUNDS);
    mint(e, &token_1, &trader, TRADER_FUNDS);

    Setup {
        client,
        router,
        pool,
        token_0,
        token_1,
        trader,
    }
}

pub fn approve(e: &Env, token: &Address, from: &Address, spender: &Address, amount: i128) {
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    TokenClient::new(e, token).approve(from, spender, &amount, &expiry_ledger);
}

pub fn balance(e: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(e, token).balance(who)
}
