#![cfg(test)]

use crate::test_helpers::*;
use crate::{SaleOption, TokenSale};
use force_errors::ContractError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, Vec};

fn register_with(e: &Env, options: Vec<SaleOption>) -> Address {
    e.mock_all_auths();
    let admin = Address::generate(e);
    let adapter = Address::generate(e);
    let base_token = create_token(e);
    let sale_token = create_token(e);
    e.register(TokenSale, (admin, adapter, base_token, sale_token, options))
}

#[test]
fn test_get_options_returns_table_in_order() {
    let e = Env::default();
    let s = setup(&e);

    let options = s.client.get_options();
    assert_eq!(options.len(), 2);
    assert_eq!(options.get(0).unwrap(), quarterly_option());
    assert_eq!(options.get(1).unwrap(), monthly_option());
}

#[test]
fn test_get_option_by_index() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(s.client.get_option(&1), monthly_option());
}

#[test]
fn test_get_option_out_of_range() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(s.client.try_get_option(&2), Err(Ok(ContractError::OutOfRange)));
}

#[test]
fn test_single_day_interval_is_accepted() {
    let e = Env::default();
    let option = SaleOption {
        lock_period: 10 * ONE_DAY,
        num_of_purchases: 10,
        reward_bonus: 0,
    };
    let sale = register_with(&e, vec![&e, option.clone()]);
    let client = crate::TokenSaleClient::new(&e, &sale);
    assert_eq!(client.get_option(&0), option);
}

#[test]
#[should_panic(expected = "Error(Contract, #200)")]
fn test_constructor_rejects_empty_options() {
    let e = Env::default();
    register_with(&e, Vec::new(&e));
}

#[test]
#[should_panic(expected = "Error(Contract, #200)")]
fn test_constructor_rejects_zero_purchases() {
    let e = Env::default();
    let option = SaleOption {
        lock_period: 30 * ONE_DAY,
        num_of_purchases: 0,
        reward_bonus: 0,
    };
    register_with(&e, vec![&e, option]);
}

#[test]
#[should_panic(expected = "Error(Contract, #200)")]
fn test_constructor_rejects_sub_day_interval() {
    let e = Env::default();
    // 9 whole days over 10 purchases rounds down to a 0-day interval
    let option = SaleOption {
        lock_period: 9 * ONE_DAY,
        num_of_purchases: 10,
        reward_bonus: 0,
    };
    register_with(&e, vec![&e, quarterly_option(), option]);
}

#[test]
#[should_panic(expected = "Error(Contract, #205)")]
fn test_constructor_rejects_identical_tokens() {
    let e = Env::default();
    e.mock_all_auths();
    let token = create_token(&e);
    e.register(
        TokenSale,
        (
            Address::generate(&e),
            Address::generate(&e),
            token.clone(),
            token,
            default_options(&e),
        ),
    );
}
