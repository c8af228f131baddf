//! Deposit registry.
//!
//! Deposits live in an append-only arena: `Deposit(i)` for `i` in
//! `0..DepositCount`, in creation order. `UserDeposits(account)` indexes the
//! arena per depositor, also in creation order. Nothing is ever removed from
//! either.
//!
//! `ActiveDeposits` lists the indices that still have purchases to make, in
//! creation order. A deposit leaves it once fully vested, so settlement and
//! the keeper poll read only live entries no matter how long the arena grows.
//! `get_all_deposits` and `get_deposits_and_available` still walk the whole
//! arena and are meant for off-chain simulation.

use crate::storage::{bump_instance, bump_persistent};
use crate::types::{DataKey, Deposit};
use force_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

pub fn deposit_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::DepositCount)
        .unwrap_or(0)
}

/// Store a new deposit at the end of the arena and return its index.
pub fn append(e: &Env, deposit: &Deposit) -> Result<u32, ContractError> {
    let index = deposit_count(e);
    let next = index.checked_add(1).ok_or(ContractError::Overflow)?;

    write(e, index, deposit);

    let user_key = DataKey::UserDeposits(deposit.depositor.clone());
    let mut indices = user_indices(e, &deposit.depositor);
    indices.push_back(index);
    e.storage().persistent().set(&user_key, &indices);
    bump_persistent(e, &user_key);

    let mut active = active_indices(e);
    active.push_back(index);
    write_active(e, &active);

    e.storage().instance().set(&DataKey::DepositCount, &next);
    bump_instance(e);
    Ok(index)
}

pub fn read(e: &Env, index: u32) -> Result<Deposit, ContractError> {
    let key = DataKey::Deposit(index);
    let deposit: Deposit = e
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::OutOfRange)?;
    bump_persistent(e, &key);
    Ok(deposit)
}

pub fn write(e: &Env, index: u32, deposit: &Deposit) {
    let key = DataKey::Deposit(index);
    e.storage().persistent().set(&key, deposit);
    bump_persistent(e, &key);
}

pub fn read_all(e: &Env) -> Result<Vec<Deposit>, ContractError> {
    let mut deposits = Vec::new(e);
    for index in 0..deposit_count(e) {
        deposits.push_back(read(e, index)?);
    }
    Ok(deposits)
}

pub fn user_indices(e: &Env, account: &Address) -> Vec<u32> {
    e.storage()
        .persistent()
        .get(&DataKey::UserDeposits(account.clone()))
        .unwrap_or_else(|| Vec::new(e))
}

pub fn read_user_deposits(e: &Env, account: &Address) -> Result<Vec<Deposit>, ContractError> {
    let mut deposits = Vec::new(e);
    for index in user_indices(e, account).iter() {
        deposits.push_back(read(e, index)?);
    }
    Ok(deposits)
}

pub fn active_indices(e: &Env) -> Vec<u32> {
    let key = DataKey::ActiveDeposits;
    match e.storage().persistent().get(&key) {
        Some(active) => {
            bump_persistent(e, &key);
            active
        }
        None => Vec::new(e),
    }
}

fn write_active(e: &Env, active: &Vec<u32>) {
    let key = DataKey::ActiveDeposits;
    e.storage().persistent().set(&key, active);
    bump_persistent(e, &key);
}

/// Drop a fully vested deposit from the active index.
pub fn retire(e: &Env, index: u32) {
    let mut active = active_indices(e);
    if let Some(position) = active.first_index_of(index) {
        active.remove(position);
        write_active(e, &active);
    }
}
