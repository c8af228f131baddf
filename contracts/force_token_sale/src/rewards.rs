//! Reward reserve and owed rewards.
//!
//! Bonuses are paid from the contract's own sale-token balance. The part of
//! that balance already owed to depositors is set aside: a bonus is paid from
//! what remains, and any part it cannot cover is added to the depositor's
//! owed balance, to be collected with `claim_rewards` once the reserve is
//! topped up.

use crate::events;
use crate::storage::{bump_instance, bump_persistent, read_sale_token};
use crate::types::DataKey;
use force_dex_interface::math::{add_i128, sub_i128};
use force_errors::ContractError;
use soroban_sdk::{token::TokenClient, Address, Env};

/// Reward bonus denominator: bonuses are in tenths of a percent.
pub const BONUS_SCALE: i128 = 1_000;

pub fn total_owed(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalRewardOwed)
        .unwrap_or(0)
}

pub fn owed(e: &Env, account: &Address) -> i128 {
    let key = DataKey::RewardOwed(account.clone());
    match e.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(e, &key);
            amount
        }
        None => 0,
    }
}

fn write_owed(e: &Env, account: &Address, amount: i128, total: i128) {
    let key = DataKey::RewardOwed(account.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &amount);
        bump_persistent(e, &key);
    }
    e.storage().instance().set(&DataKey::TotalRewardOwed, &total);
    bump_instance(e);
}

/// Sale-token balance of the contract.
pub fn reserve(e: &Env) -> i128 {
    TokenClient::new(e, &read_sale_token(e)).balance(&e.current_contract_address())
}

/// Reserve not yet owed to anyone.
pub fn free_reserve(e: &Env) -> i128 {
    reserve(e).saturating_sub(total_owed(e)).max(0)
}

/// Pay `reward` to `to` from the free reserve and defer the rest.
/// Returns the deferred amount.
pub fn pay_or_defer(
    e: &Env,
    to: &Address,
    index: u32,
    reward: i128,
) -> Result<i128, ContractError> {
    if reward <= 0 {
        return Ok(0);
    }
    let paid = reward.min(free_reserve(e));
    if paid > 0 {
        let sale = e.current_contract_address();
        TokenClient::new(e, &read_sale_token(e)).transfer(&sale, to, &paid);
    }

    let deferred = sub_i128(reward, paid)?;
    if deferred > 0 {
        let amount = add_i128(owed(e, to), deferred)?;
        let total = add_i128(total_owed(e), deferred)?;
        write_owed(e, to, amount, total);
        events::emit_reward_deferred(e, to, index, deferred);
    }
    Ok(deferred)
}

/// Pay out as much of `account`'s owed rewards as the reserve holds.
///
/// Fails `InsufficientRewardReserve` when something is owed but the reserve
/// is empty. Returns the amount paid, 0 when nothing is owed.
pub fn claim(e: &Env, account: &Address) -> Result<i128, ContractError> {
    let amount = owed(e, account);
    if amount == 0 {
        return Ok(0);
    }
    let paid = amount.min(reserve(e));
    if paid <= 0 {
        return Err(ContractError::InsufficientRewardReserve);
    }

    let remaining = sub_i128(amount, paid)?;
    let total = sub_i128(total_owed(e), paid)?;
    write_owed(e, account, remaining, total);
    let sale = e.current_contract_address();
    TokenClient::new(e, &read_sale_token(e)).transfer(&sale, account, &paid);
    events::emit_reward_claimed(e, account, paid, remaining);
    Ok(paid)
}
