//! Deployment helpers for tests that need a live pool behind an adapter.
//!
//! All helpers mint through the asset admin, so the caller must have enabled
//! `e.mock_all_auths()`.

use crate::{
    ReferenceConcentratedPool, ReferenceConcentratedPoolClient, ReferencePair, ReferencePairClient,
    ReferenceRouter, ReferenceRouterClient,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};

/// Reserve depth used when a test does not care about price impact.
pub const DEFAULT_RESERVE: i128 = 1_000_000_000_000;

/// 0.05 % fee tier.
pub const DEFAULT_FEE_PIPS: u32 = 500;

/// Register a Stellar asset with a fresh admin and return its address.
pub fn create_token(e: &Env) -> Address {
    let admin = Address::generate(e);
    e.register_stellar_asset_contract_v2(admin).address()
}

pub fn mint(e: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(e, token).mint(to, &amount);
}

pub fn deploy_router(e: &Env) -> Address {
    e.register(ReferenceRouter, ())
}

/// Deploy a constant-product pair holding `reserve_a` of `token_a` and
/// `reserve_b` of `token_b`, and register it with `router`.
pub fn deploy_pair(
    e: &Env,
    router: &Address,
    token_a: &Address,
    token_b: &Address,
    reserve_a: i128,
    reserve_b: i128,
) -> Address {
    let pair = e.register(ReferencePair, (token_a.clone(), token_b.clone()));
    mint(e, token_a, &pair, reserve_a);
    mint(e, token_b, &pair, reserve_b);
    ReferencePairClient::new(e, &pair).sync();
    ReferenceRouterClient::new(e, router).add_pool(&pair);
    pair
}

/// Deploy a concentrated pool funded with `reserve` of each token, set to
/// `sqrt_price_x64` with `liquidity`, and register it with `router`.
pub fn deploy_concentrated_pool(
    e: &Env,
    router: &Address,
    token_a: &Address,
    token_b: &Address,
    reserve: i128,
    sqrt_price_x64: u128,
    liquidity: u128,
) -> Address {
    let pool = e.register(
        ReferenceConcentratedPool,
        (token_a.clone(), token_b.clone(), DEFAULT_FEE_PIPS),
    );
    mint(e, token_a, &pool, reserve);
    mint(e, token_b, &pool, reserve);
    ReferenceConcentratedPoolClient::new(e, &pool).initialize(&sqrt_price_x64, &liquidity);
    ReferenceRouterClient::new(e, router).add_pool(&pool);
    pool
}
