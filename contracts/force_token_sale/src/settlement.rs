//! Settlement engine: turns due purchases into swaps and rewards.
//!
//! Each deposit is settled in checks-effects-interactions order. The new
//! `purchases_made` is persisted before the adapter is called, so an adapter
//! that re-enters sees the purchases as already made. A failed swap rolls
//! back the adapter's own effects (it is invoked with `try_swap`), after
//! which the counter is restored here.
//!
//! The adapter's reported output is not trusted: the bonus is computed on the
//! growth of the depositor's sale-token balance, and a swap that delivered
//! less than it reported aborts the invocation, swap included.

use crate::adapter_handler::read_adapter;
use crate::entitlement::{available_purchases, purchase_amount};
use crate::events;
use crate::options::read_option;
use crate::registry;
use crate::rewards::{self, BONUS_SCALE};
use crate::storage::{read_base_token, read_sale_token};
use crate::types::{Deposit, PurchaseFailure, PurchaseReceipt, SettlementReport};
use force_dex_interface::math::{add_i128, mul_i128, scale_i128, sub_i128};
use force_dex_interface::{flatten_swap_result, DexAdapterClient};
use force_errors::ContractError;
use soroban_sdk::{log, token::TokenClient, Env, InvokeError, Vec};

/// Result of one deposit's settlement attempt.
pub enum Settlement {
    /// Nothing was due.
    Idle,
    Completed(PurchaseReceipt),
    /// The swap failed. `ContractError` is the error to surface when the
    /// failure must fail the caller; `PurchaseFailure` keeps the raw code.
    Failed(PurchaseFailure, ContractError),
}

/// Buy every tranche of deposit `index` that is due at `now`.
///
/// Errors are reserved for conditions that must abort the whole invocation:
/// arithmetic faults and an adapter that under-delivers. A failed swap is
/// reported as [`Settlement::Failed`] with the deposit left as it was.
pub fn settle_deposit(e: &Env, index: u32, now: u64) -> Result<Settlement, ContractError> {
    let mut deposit: Deposit = registry::read(e, index)?;
    let option = read_option(e, deposit.option)?;
    let available = available_purchases(&option, &deposit, now);
    if available == 0 {
        return Ok(Settlement::Idle);
    }

    let amount_in = mul_i128(
        purchase_amount(&option, deposit.amount_deposited),
        available as i128,
    )?;
    let previous = deposit.purchases_made;
    deposit.purchases_made = previous
        .checked_add(available)
        .ok_or(ContractError::Overflow)?;
    registry::write(e, index, &deposit);

    let sale = e.current_contract_address();
    let adapter = read_adapter(e);
    let base_token = read_base_token(e);
    let sale_token = read_sale_token(e);
    let base = TokenClient::new(e, &base_token);
    let sale_client = TokenClient::new(e, &sale_token);
    base.approve(&sale, &adapter, &amount_in, &e.ledger().sequence());
    let balance_before = sale_client.balance(&deposit.depositor);

    let result = DexAdapterClient::new(e, &adapter).try_swap(
        &sale,
        &amount_in,
        &deposit.depositor,
        &base_token,
        &sale_token,
    );
    let foreign_code = match &result {
        Err(Err(InvokeError::Contract(code))) => Some(*code),
        _ => None,
    };

    match flatten_swap_result(result) {
        Ok(reported) => {
            base.approve(&sale, &adapter, &0, &e.ledger().sequence());
            let amount_out = sub_i128(sale_client.balance(&deposit.depositor), balance_before)?;
            if amount_out <= 0 || amount_out < reported {
                log!(e, "adapter under-delivered", index, reported, amount_out);
                return Err(ContractError::SwapFailed);
            }

            let reward = scale_i128(amount_out, option.reward_bonus, BONUS_SCALE)?;
            let reward_deferred = rewards::pay_or_defer(e, &deposit.depositor, index, reward)?;
            if deposit.purchases_made >= option.num_of_purchases {
                registry::retire(e, index);
            }
            events::emit_purchase_completed(
                e,
                &deposit.depositor,
                index,
                available,
                amount_in,
                amount_out,
                reward,
            );
            Ok(Settlement::Completed(PurchaseReceipt {
                deposit_index: index,
                purchases: available,
                amount_in,
                amount_out,
                reward,
                reward_deferred,
            }))
        }
        Err(err) => {
            deposit.purchases_made = previous;
            registry::write(e, index, &deposit);
            base.approve(&sale, &adapter, &0, &e.ledger().sequence());

            let error_code = foreign_code.unwrap_or(err as u32);
            log!(e, "purchase failed", index, error_code);
            events::emit_purchase_failed(e, &deposit.depositor, index, error_code);
            Ok(Settlement::Failed(
                PurchaseFailure {
                    deposit_index: index,
                    error_code,
                },
                err,
            ))
        }
    }
}

/// Settle every active deposit in registry order. A failed swap skips its
/// deposit and is recorded in the report; the rest of the batch still
/// settles. A bonus the reserve cannot cover is owed, not failed.
pub fn complete_all(e: &Env) -> Result<SettlementReport, ContractError> {
    let now = e.ledger().timestamp();
    let mut report = SettlementReport {
        deposits_settled: 0,
        purchases_made: 0,
        rewards_deferred: 0,
        failures: Vec::new(e),
    };

    for index in registry::active_indices(e).iter() {
        match settle_deposit(e, index, now)? {
            Settlement::Idle => {}
            Settlement::Completed(receipt) => {
                report.deposits_settled += 1;
                report.purchases_made += receipt.purchases;
                report.rewards_deferred =
                    add_i128(report.rewards_deferred, receipt.reward_deferred)?;
            }
            Settlement::Failed(failure, _) => report.failures.push_back(failure),
        }
    }

    events::emit_settlement_completed(
        e,
        report.deposits_settled,
        report.purchases_made,
        report.failures.len(),
    );
    Ok(report)
}

/// Every deposit with its currently available purchases, as parallel vectors.
pub fn deposits_with_available(
    e: &Env,
    now: u64,
) -> Result<(Vec<Deposit>, Vec<u32>), ContractError> {
    let deposits = registry::read_all(e)?;
    let mut available = Vec::new(e);
    for deposit in deposits.iter() {
        let option = read_option(e, deposit.option)?;
        available.push_back(available_purchases(&option, &deposit, now));
    }
    Ok((deposits, available))
}

pub fn has_outstanding(e: &Env, now: u64) -> Result<bool, ContractError> {
    for index in registry::active_indices(e).iter() {
        let deposit = registry::read(e, index)?;
        let option = read_option(e, deposit.option)?;
        if available_purchases(&option, &deposit, now) > 0 {
            return Ok(true);
        }
    }
    Ok(false)
}
