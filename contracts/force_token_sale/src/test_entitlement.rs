#![cfg(test)]

use crate::entitlement::{
    available_purchases, entitled_purchases, interval_days, purchase_amount, SECONDS_PER_DAY,
};
use crate::test_helpers::{monthly_option, quarterly_option};
use crate::{Deposit, SaleOption};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

const T0: u64 = 1_000_000;
const DAY: u64 = SECONDS_PER_DAY;

#[test]
fn test_interval_is_whole_days() {
    assert_eq!(interval_days(&quarterly_option()), 9);
    assert_eq!(interval_days(&monthly_option()), 10);
    let uneven = SaleOption {
        lock_period: 100 * DAY + 3_600,
        num_of_purchases: 7,
        reward_bonus: 0,
    };
    // 100 / 7
    assert_eq!(interval_days(&uneven), 14);
}

#[test]
fn test_opening_purchase_is_due_at_deposit() {
    let option = quarterly_option();
    assert_eq!(entitled_purchases(&option, T0, T0), 1);
}

#[test]
fn test_entitlement_steps_on_interval_boundary() {
    let option = quarterly_option();
    // one second short of the first full interval
    assert_eq!(entitled_purchases(&option, T0, T0 + 9 * DAY - 1), 1);
    assert_eq!(entitled_purchases(&option, T0, T0 + 9 * DAY), 2);
    assert_eq!(entitled_purchases(&option, T0, T0 + 18 * DAY - 1), 2);
    assert_eq!(entitled_purchases(&option, T0, T0 + 18 * DAY), 3);
}

#[test]
fn test_halfway_through_quarter() {
    let option = quarterly_option();
    assert_eq!(entitled_purchases(&option, T0, T0 + 45 * DAY), 6);
}

#[test]
fn test_full_vesting_at_lock_period() {
    let option = quarterly_option();
    assert_eq!(entitled_purchases(&option, T0, T0 + 89 * DAY), 10);
    assert_eq!(entitled_purchases(&option, T0, T0 + 90 * DAY), 10);
    assert_eq!(entitled_purchases(&option, T0, T0 + 10_000 * DAY), 10);
}

#[test]
fn test_entitlement_capped_before_lock_period_ends() {
    // 31 days in 3 purchases: 10-day interval, so day 30 would be the 4th
    let option = SaleOption {
        lock_period: 31 * DAY,
        num_of_purchases: 3,
        reward_bonus: 0,
    };
    assert_eq!(entitled_purchases(&option, T0, T0 + 30 * DAY), 3);
}

#[test]
fn test_clock_before_deposit_counts_as_zero_elapsed() {
    let option = quarterly_option();
    assert_eq!(entitled_purchases(&option, T0, T0 - 5 * DAY), 1);
}

#[test]
fn test_single_purchase_option() {
    let option = SaleOption {
        lock_period: 7 * DAY,
        num_of_purchases: 1,
        reward_bonus: 0,
    };
    assert_eq!(entitled_purchases(&option, T0, T0), 1);
    assert_eq!(entitled_purchases(&option, T0, T0 + 7 * DAY), 1);
}

#[test]
fn test_available_is_entitled_minus_made() {
    let e = Env::default();
    let option = quarterly_option();
    let mut deposit = Deposit {
        depositor: Address::generate(&e),
        amount_deposited: 10_000,
        option: 0,
        deposited_at: T0,
        purchases_made: 1,
    };
    let now = T0 + 45 * DAY;
    assert_eq!(available_purchases(&option, &deposit, now), 5);
    assert_eq!(
        available_purchases(&option, &deposit, now) + deposit.purchases_made,
        entitled_purchases(&option, T0, now)
    );

    deposit.purchases_made = 6;
    assert_eq!(available_purchases(&option, &deposit, now), 0);
    // never negative
    deposit.purchases_made = 10;
    assert_eq!(available_purchases(&option, &deposit, now), 0);
}

#[test]
fn test_purchase_amount_rounds_down() {
    let option = quarterly_option();
    assert_eq!(purchase_amount(&option, 10_000), 1_000);
    assert_eq!(purchase_amount(&option, 10_009), 1_000);
    assert_eq!(purchase_amount(&option, 10), 1);
}
