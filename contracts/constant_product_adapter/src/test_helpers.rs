//! Shared test helpers for constant_product_adapter tests.

use crate::{ConstantProductAdapter, ConstantProductAdapterClient};
use force_test_pools::testutils::{create_token, deploy_pair, deploy_router, mint};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

pub const RESERVE: i128 = 100_000;
pub const TRADER_FUNDS: i128 = 1_000_000;

pub struct Setup<'a> {
    pub client: ConstantProductAdapterClient<'a>,
    pub router: Address,
    pub pair: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub trader: Address,
}

/// Router with one 100k/100k pair, an adapter bound to it, and a funded trader
/// who has not yet approved the adapter.
pub fn setup(e: &Env) -> Setup<'_> {
    e.mock_all_auths();

    let router = deploy_router(e);
    let token_in = create_token(e);
    let token_out = create_token(e);
    let pair = deploy_pair(e, &router, &token_in, &token_out, RESERVE, RESERVE);

    let adapter = e.register(ConstantProductAdapter, (router.clone(),));
    let client = ConstantProductAdapterClient::new(e, &adapter);

    let trader = Address::generate(e);
    mint(e, &token_in, &trader, TRADER_FUNDS);

    Setup {
        client,
        router,
        pair,
        token_in,
        token_out,
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
