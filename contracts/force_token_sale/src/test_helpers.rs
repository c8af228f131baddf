//! Shared test helpers for force_token_sale tests.

use crate::{SaleOption, TokenSale, TokenSaleClient};
use force_dex_interface::DexAdapterInterface;
use force_errors::ContractError;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, vec, Address, Env, Error, Vec,
};

/// One day in seconds.
pub const ONE_DAY: u64 = 86_400;

/// Start of the test clock, far enough from zero for back-dated deposits.
pub const START: u64 = 1_700_000_000;

/// Sale-token balance held by the sale contract for reward payouts.
pub const REWARD_RESERVE: i128 = 1_000_000_000;

/// Sale-token inventory of each mock adapter.
pub const ADAPTER_INVENTORY: i128 = 1_000_000_000;

/// Base asset minted to each depositor.
pub const DEPOSITOR_FUNDS: i128 = 1_000_000;

/// Error code no `ContractError` variant uses.
pub const FOREIGN_CODE: u32 = 9_999;

// ═══════════════════════════════════════════════════════════════════
// Mock adapter
// ═══════════════════════════════════════════════════════════════════

/// How the mock adapter reacts to a swap for a given recipient.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureMode {
    /// Swap normally.
    Pass,
    /// Fail with `InsufficientInput`.
    Reject,
    /// Trap without a contract error.
    Trap,
    /// Fail with an error code unknown to `ContractError`.
    Foreign,
    /// Take the input, deliver nothing and report a large output.
    Lie,
}

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Router,
    RateNumerator,
    RateDenominator,
    SwapCount,
    Mode(Address),
}

/// Adapter that pulls the input and pays `amount_in * num / den` of the output
/// token from its own inventory.
#[contract]
pub struct MockAdapter;

#[contractimpl]
impl MockAdapter {
    pub fn __constructor(e: Env, router: Address, numerator: i128, denominator: i128) {
        e.storage().instance().set(&MockKey::Router, &router);
        e.storage().instance().set(&MockKey::RateNumerator, &numerator);
        e.storage()
            .instance()
            .set(&MockKey::RateDenominator, &denominator);
    }

    pub fn set_mode(e: Env, recipient: Address, mode: FailureMode) {
        e.storage().instance().set(&MockKey::Mode(recipient), &mode);
    }

    pub fn swap_count(e: Env) -> u32 {
        e.storage().instance().get(&MockKey::SwapCount).unwrap_or(0)
    }
}

#[contractimpl]
impl DexAdapterInterface for MockAdapter {
    fn swap(
        e: Env,
        from: Address,
        amount_in: i128,
        recipient: Address,
        token_in: Address,
        token_out: Address,
    ) -> Result<i128, ContractError> {
        from.require_auth();
        let mode: FailureMode = e
            .storage()
            .instance()
            .get(&MockKey::Mode(recipient.clone()))
            .unwrap_or(FailureMode::Pass);
        match mode {
            FailureMode::Pass => {}
            FailureMode::Reject => return Err(ContractError::InsufficientInput),
            FailureMode::Trap => panic!("mock adapter trapped"),
            FailureMode::Foreign => {
                panic_with_error!(&e, Error::from_contract_error(FOREIGN_CODE))
            }
            FailureMode::Lie => {}
        }

        let adapter = e.current_contract_address();
        TokenClient::new(&e, &token_in).transfer_from(&adapter, &from, &adapter, &amount_in);
        if mode == FailureMode::Lie {
            return Ok(amount_in * 1_000_000);
        }

        let numerator: i128 = e.storage().instance().get(&MockKey::RateNumerator).unwrap();
        let denominator: i128 = e
            .storage()
            .instance()
            .get(&MockKey::RateDenominator)
            .unwrap();
        let amount_out = amount_in * numerator / denominator;
        TokenClient::new(&e, &token_out).transfer(&adapter, &recipient, &amount_out);

        let count = Self::swap_count(e.clone()) + 1;
        e.storage().instance().set(&MockKey::SwapCount, &count);
        Ok(amount_out)
    }

    fn get_router(e: Env) -> Address {
        e.storage().instance().get(&MockKey::Router).unwrap()
    }
}

// ═══════════════════════════════════════════════════════════════════
// Fixtures
// ═══════════════════════════════════════════════════════════════════

/// 3 months in 10 purchases (one every 9 days) with a 12.5 % bonus.
pub fn quarterly_option() -> SaleOption {
    SaleOption {
        lock_period: 90 * ONE_DAY,
        num_of_purchases: 10,
        reward_bonus: 125,
    }
}

/// 30 days in 3 purchases without bonus.
pub fn monthly_option() -> SaleOption {
    SaleOption {
        lock_period: 30 * ONE_DAY,
        num_of_purchases: 3,
        reward_bonus: 0,
    }
}

pub fn default_options(e: &Env) -> Vec<SaleOption> {
    vec![e, quarterly_option(), monthly_option()]
}

pub struct Setup<'a> {
    pub client: TokenSaleClient<'a>,
    pub sale: Address,
    pub admin: Address,
    pub base_token: Address,
    pub sale_token: Address,
    pub adapter: MockAdapterClient<'a>,
}

pub fn create_token(e: &Env) -> Address {
    let token_admin = Address::generate(e);
    e.register_stellar_asset_contract_v2(token_admin).address()
}

pub fn mint(e: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(e, token).mint(to, &amount);
}

pub fn balance(e: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(e, token).balance(who)
}

pub fn set_time(e: &Env, timestamp: u64) {
    e.ledger().with_mut(|li| li.timestamp = timestamp);
}

/// Deploy a mock adapter paying `numerator / denominator` per unit in,
/// stocked with sale tokens.
pub fn deploy_mock_adapter<'a>(
    e: &'a Env,
    sale_token: &Address,
    numerator: i128,
    denominator: i128,
) -> MockAdapterClient<'a> {
    let router = Address::generate(e);
    let adapter = e.register(MockAdapter, (router, numerator, denominator));
    mint(e, sale_token, &adapter, ADAPTER_INVENTORY);
    MockAdapterClient::new(e, &adapter)
}

/// Sale contract with [`default_options`], a 1:1 mock adapter and a funded
/// reward reserve.
pub fn setup(e: &Env) -> Setup<'_> {
    setup_with_reserve(e, REWARD_RESERVE)
}

pub fn setup_with_reserve(e: &Env, reward_reserve: i128) -> Setup<'_> {
    e.mock_all_auths();
    set_time(e, START);

    let admin = Address::generate(e);
    let base_token = create_token(e);
    let sale_token = create_token(e);
    let adapter = deploy_mock_adapter(e, &sale_token, 1, 1);

    let sale = e.register(
        TokenSale,
        (
            admin.clone(),
            adapter.address.clone(),
            base_token.clone(),
            sale_token.clone(),
            default_options(e),
        ),
    );
    if reward_reserve > 0 {
        mint(e, &sale_token, &sale, reward_reserve);
    }

    Setup {
        client: TokenSaleClient::new(e, &sale),
        sale,
        admin,
        base_token,
        sale_token,
        adapter,
    }
}

/// A depositor holding [`DEPOSITOR_FUNDS`] of base asset, with the sale
/// contract approved for all of it.
pub fn funded_depositor(e: &Env, s: &Setup) -> Address {
    let depositor = Address::generate(e);
    mint(e, &s.base_token, &depositor, DEPOSITOR_FUNDS);
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    TokenClient::new(e, &s.base_token).approve(
        &depositor,
        &s.sale,
        &DEPOSITOR_FUNDS,
        &expiry_ledger,
    );
    depositor
}
