//! Admin and active-adapter configuration.
//!
//! Deposits do not record which adapter served them: a replacement takes
//! effect for the next swap of every deposit and never touches completed
//! purchases.

use crate::events;
use crate::storage::{bump_instance, read_address};
use crate::types::DataKey;
use force_errors::ContractError;
use soroban_sdk::{Address, Env};

pub fn read_admin(e: &Env) -> Address {
    read_address(e, &DataKey::Admin)
}

pub fn read_adapter(e: &Env) -> Address {
    read_address(e, &DataKey::DexAdapter)
}

/// `caller` must be the stored admin and must have authorized the call.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != read_admin(e) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn set_adapter(e: &Env, caller: &Address, new_adapter: &Address) -> Result<(), ContractError> {
    require_admin(e, caller)?;
    let old = read_adapter(e);
    e.storage().instance().set(&DataKey::DexAdapter, new_adapter);
    bump_instance(e);
    events::emit_dex_adapter_updated(e, &old, new_adapter);
    Ok(())
}

pub fn transfer_admin(e: &Env, caller: &Address, new_admin: &Address) -> Result<(), ContractError> {
    require_admin(e, caller)?;
    e.storage().instance().set(&DataKey::Admin, new_admin);
    bump_instance(e);
    events::emit_admin_transferred(e, caller, new_admin);
    Ok(())
}
