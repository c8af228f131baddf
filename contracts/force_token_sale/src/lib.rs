#![no_std]

//! # Force Token Sale
//!
//! Depositors lock a base asset under one of a fixed set of vesting options.
//! The deposit is spent in `num_of_purchases` equal tranches spread over the
//! option's lock period; each tranche is swapped for the sale token through
//! the active DEX adapter and delivered straight to the depositor, together
//! with a bonus paid from the contract's own sale-token balance.
//!
//! ## Lifecycle
//! 1. `deposit` takes the base asset into custody and buys the opening
//!    tranche in the same invocation. If that swap fails the deposit fails.
//! 2. An external keeper polls `has_outstanding_purchases` (or
//!    `get_deposits_and_available`) and calls the
//!    permissionless `complete_outstanding_purchases` when tranches fall
//!    due. Here a failed swap skips only its own deposit.
//! 3. A bonus the reward reserve cannot cover is owed to the depositor and
//!    paid out by `claim_rewards` once the reserve is topped up.
//!
//! ## Storage Layout
//!
//! | Key                        | Tier           |
//! |----------------------------|----------------|
//! | `Admin`, `DexAdapter`      | `instance()`   |
//! | `BaseToken`, `SaleToken`   | `instance()`   |
//! | `Options`, `DepositCount`  | `instance()`   |
//! | `Lock`, `TotalRewardOwed`  | `instance()`   |
//! | `Deposit(index)`           | `persistent()` |
//! | `UserDeposits(account)`    | `persistent()` |
//! | `ActiveDeposits`           | `persistent()` |
//! | `RewardOwed(account)`      | `persistent()` |

pub mod adapter_handler;
pub mod entitlement;
pub mod events;
pub mod options;
pub mod registry;
pub mod rewards;
pub mod settlement;
pub mod storage;
pub mod types;

use crate::settlement::Settlement;
use crate::storage::{bump_instance, read_base_token, read_sale_token};
pub use crate::types::{
    DataKey, Deposit, PurchaseFailure, PurchaseReceipt, SaleOption, SettlementReport,
};
use force_errors::ContractError;
use soroban_sdk::{contract, contractimpl, panic_with_error, token::TokenClient, Address, Env, Vec};

#[contract]
pub struct TokenSale;

impl TokenSale {
    fn acquire_lock(e: &Env) -> Result<(), ContractError> {
        let locked: bool = e.storage().instance().get(&DataKey::Lock).unwrap_or(false);
        if locked {
            return Err(ContractError::ReentrancyDetected);
        }
        e.storage().instance().set(&DataKey::Lock, &true);
        Ok(())
    }

    fn release_lock(e: &Env) {
        e.storage().instance().set(&DataKey::Lock, &false);
    }

    /// Run `f` holding the reentrancy lock. On error the invocation is
    /// rolled back, lock included.
    fn with_reentrancy_guard<T, F>(e: &Env, f: F) -> Result<T, ContractError>
    where
        F: FnOnce() -> Result<T, ContractError>,
    {
        Self::acquire_lock(e)?;
        let result = f()?;
        Self::release_lock(e);
        Ok(result)
    }
}

#[contractimpl]
impl TokenSale {
    /// Fix the configuration and the option table. Options must be non-empty
    /// and allow at most one purchase per day.
    pub fn __constructor(
        e: Env,
        admin: Address,
        dex_adapter: Address,
        base_token: Address,
        sale_token: Address,
        options: Vec<SaleOption>,
    ) {
        if let Err(err) = options::validate_options(&options) {
            panic_with_error!(&e, err);
        }
        if base_token == sale_token {
            panic_with_error!(&e, ContractError::IdenticalTokens);
        }
        let store = e.storage().instance();
        store.set(&DataKey::Admin, &admin);
        store.set(&DataKey::DexAdapter, &dex_adapter);
        store.set(&DataKey::BaseToken, &base_token);
        store.set(&DataKey::SaleToken, &sale_token);
        store.set(&DataKey::DepositCount, &0_u32);
        options::write_options(&e, &options);
        bump_instance(&e);
    }

    // ── Deposits ─────────────────────────────────────────────────────────

    /// Lock `amount` of the base asset under option `option_index` and buy
    /// the opening tranche.
    ///
    /// `account` must have approved this contract for `amount`. Returns the
    /// stored deposit with `purchases_made == 1`. Any swap failure fails the
    /// call and nothing is kept.
    pub fn deposit(
        e: Env,
        account: Address,
        amount: i128,
        option_index: u32,
    ) -> Result<Deposit, ContractError> {
        account.require_auth();
        let option =
            options::read_option(&e, option_index).map_err(|_| ContractError::InvalidOption)?;
        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        if amount < option.num_of_purchases as i128 {
            return Err(ContractError::DepositTooSmall);
        }

        Self::with_reentrancy_guard(&e, || {
            let base = TokenClient::new(&e, &read_base_token(&e));
            let sale = e.current_contract_address();
            if base.allowance(&account, &sale) < amount || base.balance(&account) < amount {
                return Err(ContractError::InsufficientAllowance);
            }
            base.transfer_from(&sale, &account, &sale, &amount);

            let now = e.ledger().timestamp();
            let index = registry::append(
                &e,
                &Deposit {
                    depositor: account.clone(),
                    amount_deposited: amount,
                    option: option_index,
                    deposited_at: now,
                    purchases_made: 0,
                },
            )?;
            events::emit_deposit_created(&e, &account, index, amount, option_index);

            if let Settlement::Failed(_, err) = settlement::settle_deposit(&e, index, now)? {
                return Err(err);
            }
            registry::read(&e, index)
        })
    }

    pub fn get_all_deposits(e: Env) -> Result<Vec<Deposit>, ContractError> {
        registry::read_all(&e)
    }

    pub fn get_deposit(e: Env, index: u32) -> Result<Deposit, ContractError> {
        registry::read(&e, index)
    }

    pub fn get_all_user_deposits(e: Env, account: Address) -> Result<Vec<Deposit>, ContractError> {
        registry::read_user_deposits(&e, &account)
    }

    pub fn get_deposit_count(e: Env) -> u32 {
        registry::deposit_count(&e)
    }

    /// Indices of the deposits that still have purchases to make.
    pub fn get_active_deposits(e: Env) -> Vec<u32> {
        registry::active_indices(&e)
    }

    // ── Options ──────────────────────────────────────────────────────────

    pub fn get_options(e: Env) -> Vec<SaleOption> {
        options::read_options(&e)
    }

    pub fn get_option(e: Env, index: u32) -> Result<SaleOption, ContractError> {
        options::read_option(&e, index)
    }

    // ── Settlement ───────────────────────────────────────────────────────

    /// All deposits and, at the same positions, the purchases each could
    /// complete right now. Reads the whole registry, so it is meant to be
    /// simulated off-chain rather than submitted.
    pub fn get_deposits_and_available(
        e: Env,
    ) -> Result<(Vec<Deposit>, Vec<u32>), ContractError> {
        settlement::deposits_with_available(&e, e.ledger().timestamp())
    }

    pub fn has_outstanding_purchases(e: Env) -> Result<bool, ContractError> {
        settlement::has_outstanding(&e, e.ledger().timestamp())
    }

    /// Buy every due tranche of every deposit. Callable by anyone.
    ///
    /// A deposit whose swap fails keeps its purchase count and is listed in
    /// the report's `failures`; the others still settle. A bonus the reserve
    /// cannot cover is added to the depositor's owed rewards. An adapter that
    /// delivers less than it reports aborts the whole call with `SwapFailed`.
    pub fn complete_outstanding_purchases(
        e: Env,
    ) -> Result<SettlementReport, ContractError> {
        Self::with_reentrancy_guard(&e, || settlement::complete_all(&e))
    }

    /// Sale-token balance held for reward payouts, owed rewards included.
    pub fn get_reward_reserve(e: Env) -> i128 {
        rewards::reserve(&e)
    }

    pub fn get_reward_owed(e: Env, account: Address) -> i128 {
        rewards::owed(&e, &account)
    }

    /// Pay out `account`'s owed rewards, as far as the reserve allows.
    /// Returns the amount paid.
    pub fn claim_rewards(e: Env, account: Address) -> Result<i128, ContractError> {
        account.require_auth();
        Self::with_reentrancy_guard(&e, || rewards::claim(&e, &account))
    }

    // ── Configuration ────────────────────────────────────────────────────

    pub fn get_dex_adapter(e: Env) -> Address {
        adapter_handler::read_adapter(&e)
    }

    pub fn set_dex_adapter(
        e: Env,
        caller: Address,
        new_adapter: Address,
    ) -> Result<(), ContractError> {
        adapter_handler::set_adapter(&e, &caller, &new_adapter)
    }

    pub fn get_admin(e: Env) -> Address {
        adapter_handler::read_admin(&e)
    }

    pub fn transfer_admin(
        e: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        adapter_handler::transfer_admin(&e, &caller, &new_admin)
    }

    pub fn get_base_token(e: Env) -> Address {
        read_base_token(&e)
    }

    pub fn get_sale_token(e: Env) -> Address {
        read_sale_token(&e)
    }
}

/// State-seeding entry points for test harnesses. Not part of production
/// builds.
#[cfg(any(test, feature = "testutils"))]
#[contractimpl]
impl TokenSale {
    /// Record a deposit without moving funds. The contract must already hold
    /// enough base asset for its purchases to settle.
    pub fn add_deposit_test(
        e: Env,
        caller: Address,
        option: u32,
        amount: i128,
        deposited_at: u64,
        depositor: Address,
    ) -> Result<u32, ContractError> {
        adapter_handler::require_admin(&e, &caller)?;
        options::read_option(&e, option).map_err(|_| ContractError::InvalidOption)?;
        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        registry::append(
            &e,
            &Deposit {
                depositor,
                amount_deposited: amount,
                option,
                deposited_at,
                purchases_made: 0,
            },
        )
    }

    pub fn increment_purchases_made_test(
        e: Env,
        caller: Address,
        index: u32,
        count: u32,
    ) -> Result<(), ContractError> {
        adapter_handler::require_admin(&e, &caller)?;
        let mut deposit = registry::read(&e, index)?;
        let option = options::read_option(&e, deposit.option)?;
        let purchases_made = deposit
            .purchases_made
            .checked_add(count)
            .ok_or(ContractError::Overflow)?;
        if purchases_made > option.num_of_purchases {
            return Err(ContractError::PurchasesExceeded);
        }
        deposit.purchases_made = purchases_made;
        registry::write(&e, index, &deposit);
        if purchases_made == option.num_of_purchases {
            registry::retire(&e, index);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
mod test_entitlement;
#[cfg(test)]
mod test_options;
