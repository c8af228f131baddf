//! Option table: the lock-period choices, written once by the constructor.

use crate::entitlement::interval_days;
use crate::types::{DataKey, SaleOption};
use force_errors::ContractError;
use soroban_sdk::{Env, Vec};

/// Every option must spend the deposit in at least one tranche, at most one
/// tranche per day.
pub fn validate_options(options: &Vec<SaleOption>) -> Result<(), ContractError> {
    if options.is_empty() {
        return Err(ContractError::InvalidOption);
    }
    for option in options.iter() {
        if interval_days(&option) == 0 {
            return Err(ContractError::InvalidOption);
        }
    }
    Ok(())
}

pub fn write_options(e: &Env, options: &Vec<SaleOption>) {
    e.storage().instance().set(&DataKey::Options, options);
}

pub fn read_options(e: &Env) -> Vec<SaleOption> {
    e.storage()
        .instance()
        .get(&DataKey::Options)
        .unwrap_or_else(|| Vec::new(e))
}

pub fn read_option(e: &Env, index: u32) -> Result<SaleOption, ContractError> {
    read_options(e).get(index).ok_or(ContractError::OutOfRange)
}
