//! Purchase entitlement over time.
//!
//! A deposit's `num_of_purchases` tranches are spread evenly over the lock
//! period in whole days. The opening tranche is due at deposit time; each
//! further tranche falls due once another `interval_days` have fully
//! elapsed, and everything is due once the lock period is over.
//!
//! ```text
//! lock_period = 90 days, num_of_purchases = 10  =>  interval = 9 days
//!
//! elapsed (days)   0    8    9    44   45   89   90
//! entitled         1    1    2    5    6    10   10
//! ```
//!
//! All functions are pure and take `now` explicitly.

use crate::types::{Deposit, SaleOption};

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Whole days between two consecutive tranches. Zero only for options the
/// constructor rejects.
pub fn interval_days(option: &SaleOption) -> u64 {
    if option.num_of_purchases == 0 {
        return 0;
    }
    (option.lock_period / SECONDS_PER_DAY) / option.num_of_purchases as u64
}

/// Number of tranches that should have been bought by `now`.
pub fn entitled_purchases(option: &SaleOption, deposited_at: u64, now: u64) -> u32 {
    let total = option.num_of_purchases;
    let elapsed = now.saturating_sub(deposited_at);
    if elapsed >= option.lock_period {
        return total;
    }
    let interval = interval_days(option);
    if interval == 0 {
        return total;
    }
    let elapsed_intervals = (elapsed / SECONDS_PER_DAY) / interval;
    let entitled = elapsed_intervals.saturating_add(1);
    if entitled >= total as u64 {
        total
    } else {
        entitled as u32
    }
}

/// Tranches due but not yet bought.
pub fn available_purchases(option: &SaleOption, deposit: &Deposit, now: u64) -> u32 {
    entitled_purchases(option, deposit.deposited_at, now).saturating_sub(deposit.purchases_made)
}

/// Base-asset amount spent per tranche. Any remainder of the integer
/// division stays in custody.
pub fn purchase_amount(option: &SaleOption, amount_deposited: i128) -> i128 {
    if option.num_of_purchases == 0 {
        return 0;
    }
    amount_deposited / option.num_of_purchases as i128
}
