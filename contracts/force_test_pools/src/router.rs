use force_dex_interface::{
    sort_tokens, ConcentratedRouterInterface, ConstantProductPairClient,
    ConstantProductRouterInterface,
};
use soroban_sdk::{contract, contractimpl, contracttype, panic_with_error, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Pool(Address, Address),
}

fn lookup(e: &Env, token_a: &Address, token_b: &Address) -> Option<Address> {
    let (token_0, token_1) = sort_tokens(token_a, token_b).ok()?;
    e.storage()
        .persistent()
        .get(&DataKey::Pool(token_0, token_1))
}

/// Registry shared by both pool kinds. A router instance is normally
/// populated with one kind only.
#[contract]
pub struct ReferenceRouter;

#[contractimpl]
impl ReferenceRouter {
    pub fn __constructor(_e: Env) {}

    /// Register `pool` under its own token pair, replacing any earlier entry.
    pub fn add_pool(e: Env, pool: Address) {
        let client = ConstantProductPairClient::new(&e, &pool);
        let (token_0, token_1) = sort_tokens(&client.token_0(), &client.token_1())
            .unwrap_or_else(|err| panic_with_error!(&e, err));
        e.storage()
            .persistent()
            .set(&DataKey::Pool(token_0.clone(), token_1.clone()), &pool);
        e.events()
            .publish((Symbol::new(&e, "pool_added"), pool), (token_0, token_1));
    }
}

#[contractimpl]
impl ConstantProductRouterInterface for ReferenceRouter {
    fn pair_for(e: Env, token_a: Address, token_b: Address) -> Option<Address> {
        lookup(&e, &token_a, &token_b)
    }
}

#[contractimpl]
impl ConcentratedRouterInterface for ReferenceRouter {
    fn pool_by_pair(e: Env, token_a: Address, token_b: Address) -> Option<Address> {
        lookup(&e, &token_a, &token_b)
    }
}
