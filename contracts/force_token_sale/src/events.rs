use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a deposit is taken into custody.
///
/// # Topics
/// * `Symbol` - "deposit_created"
/// * `Address` - The depositor
///
/// # Data
/// * `u32` - Deposit index
/// * `i128` - Amount deposited
/// * `u32` - Option index
pub fn emit_deposit_created(e: &Env, depositor: &Address, index: u32, amount: i128, option: u32) {
    let topics = (Symbol::new(e, "deposit_created"), depositor.clone());
    let data = (index, amount, option);
    e.events().publish(topics, data);
}

/// Emitted when due purchases of a deposit were swapped and rewarded.
///
/// # Topics
/// * `Symbol` - "purchase_completed"
/// * `Address` - The depositor
///
/// # Data
/// * `u32` - Deposit index
/// * `u32` - Purchases completed in this step
/// * `i128` - Base asset swapped
/// * `i128` - Sale token delivered by the swap
/// * `i128` - Sale token paid as reward
pub fn emit_purchase_completed(
    e: &Env,
    depositor: &Address,
    index: u32,
    purchases: u32,
    amount_in: i128,
    amount_out: i128,
    reward: i128,
) {
    let topics = (Symbol::new(e, "purchase_completed"), depositor.clone());
    let data = (index, purchases, amount_in, amount_out, reward);
    e.events().publish(topics, data);
}

/// Emitted when a deposit's swap failed during bulk settlement.
///
/// # Topics
/// * `Symbol` - "purchase_failed"
/// * `Address` - The depositor
///
/// # Data
/// * `u32` - Deposit index
/// * `u32` - Raw error code raised by the adapter
pub fn emit_purchase_failed(e: &Env, depositor: &Address, index: u32, error_code: u32) {
    let topics = (Symbol::new(e, "purchase_failed"), depositor.clone());
    let data = (index, error_code);
    e.events().publish(topics, data);
}

/// Emitted when the reward reserve could not cover a bonus in full.
///
/// # Topics
/// * `Symbol` - "reward_deferred"
/// * `Address` - The depositor
///
/// # Data
/// * `u32` - Deposit index
/// * `i128` - Amount added to the depositor's owed rewards
pub fn emit_reward_deferred(e: &Env, depositor: &Address, index: u32, deferred: i128) {
    let topics = (Symbol::new(e, "reward_deferred"), depositor.clone());
    let data = (index, deferred);
    e.events().publish(topics, data);
}

/// Emitted when owed rewards are paid out.
///
/// # Topics
/// * `Symbol` - "reward_claimed"
/// * `Address` - The depositor
///
/// # Data
/// * `i128` - Amount paid
/// * `i128` - Amount still owed
pub fn emit_reward_claimed(e: &Env, depositor: &Address, paid: i128, remaining: i128) {
    let topics = (Symbol::new(e, "reward_claimed"), depositor.clone());
    let data = (paid, remaining);
    e.events().publish(topics, data);
}

/// Emitted at the end of every bulk settlement.
///
/// # Topics
/// * `Symbol` - "settlement_completed"
///
/// # Data
/// * `u32` - Deposits settled
/// * `u32` - Purchases made
/// * `u32` - Deposits that failed
pub fn emit_settlement_completed(e: &Env, deposits_settled: u32, purchases_made: u32, failed: u32) {
    let topics = (Symbol::new(e, "settlement_completed"),);
    let data = (deposits_settled, purchases_made, failed);
    e.events().publish(topics, data);
}

/// Emitted when the active DEX adapter is replaced.
///
/// # Topics
/// * `Symbol` - "dex_adapter_updated"
///
/// # Data
/// * `Address` - Previous adapter
/// * `Address` - New adapter
pub fn emit_dex_adapter_updated(e: &Env, old: &Address, new: &Address) {
    let topics = (Symbol::new(e, "dex_adapter_updated"),);
    let data = (old.clone(), new.clone());
    e.events().publish(topics, data);
}

/// Emitted when administration is handed over.
///
/// # Topics
/// * `Symbol` - "admin_transferred"
///
/// # Data
/// * `Address` - Previous admin
/// * `Address` - New admin
pub fn emit_admin_transferred(e: &Env, old: &Address, new: &Address) {
    let topics = (Symbol::new(e, "admin_transferred"),);
    let data = (old.clone(), new.clone());
    e.events().publish(topics, data);
}
