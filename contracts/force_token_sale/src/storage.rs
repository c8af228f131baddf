//! Rent bumps and instance-level configuration reads.

use crate::types::DataKey;
use force_errors::ContractError;
use soroban_sdk::{panic_with_error, Address, Env, IntoVal, Val};

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn bump_persistent<K: IntoVal<Env, Val>>(e: &Env, key: &K) {
    e.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Read a required instance address. Missing configuration is a
/// construction bug, so it traps with `NotInitialized`.
pub fn read_address(e: &Env, key: &DataKey) -> Address {
    e.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::NotInitialized))
}

pub fn read_base_token(e: &Env) -> Address {
    read_address(e, &DataKey::BaseToken)
}

pub fn read_sale_token(e: &Env) -> Address {
    read_address(e, &DataKey::SaleToken)
}
