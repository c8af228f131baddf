use force_dex_interface::math::{mul_i128, sub_i128, FEE_DENOMINATOR, FEE_NUMERATOR};
use force_dex_interface::{sort_tokens, ConstantProductPairInterface};
use force_errors::ContractError;
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, token::TokenClient, Address, Env,
    Symbol,
};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Token0,
    Token1,
    Reserve0,
    Reserve1,
}

fn read_token(e: &Env, key: &DataKey) -> Address {
    e.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(e, ContractError::NotInitialized))
}

fn read_reserve(e: &Env, key: &DataKey) -> i128 {
    e.storage().instance().get(key).unwrap_or(0)
}

fn balance_of(e: &Env, token: &Address) -> i128 {
    TokenClient::new(e, token).balance(&e.current_contract_address())
}

#[contract]
pub struct ReferencePair;

#[contractimpl]
impl ReferencePair {
    pub fn __constructor(e: Env, token_a: Address, token_b: Address) {
        let (token_0, token_1) =
            sort_tokens(&token_a, &token_b).unwrap_or_else(|err| panic_with_error!(&e, err));
        e.storage().instance().set(&DataKey::Token0, &token_0);
        e.storage().instance().set(&DataKey::Token1, &token_1);
    }

    /// Set the reserves to the pair's current token balances. Liquidity is
    /// seeded by transferring both tokens in and then calling `sync`.
    pub fn sync(e: Env) -> (i128, i128) {
        let reserve_0 = balance_of(&e, &read_token(&e, &DataKey::Token0));
        let reserve_1 = balance_of(&e, &read_token(&e, &DataKey::Token1));
        e.storage().instance().set(&DataKey::Reserve0, &reserve_0);
        e.storage().instance().set(&DataKey::Reserve1, &reserve_1);
        (reserve_0, reserve_1)
    }
}

#[contractimpl]
impl ConstantProductPairInterface for ReferencePair {
    fn token_0(e: Env) -> Address {
        read_token(&e, &DataKey::Token0)
    }

    fn token_1(e: Env) -> Address {
        read_token(&e, &DataKey::Token1)
    }

    fn get_reserves(e: Env) -> (i128, i128) {
        (
            read_reserve(&e, &DataKey::Reserve0),
            read_reserve(&e, &DataKey::Reserve1),
        )
    }

    fn swap(
        e: Env,
        amount_0_out: i128,
        amount_1_out: i128,
        to: Address,
    ) -> Result<(), ContractError> {
        if amount_0_out < 0 || amount_1_out < 0 || (amount_0_out == 0 && amount_1_out == 0) {
            return Err(ContractError::InsufficientOutputAmount);
        }
        let reserve_0 = read_reserve(&e, &DataKey::Reserve0);
        let reserve_1 = read_reserve(&e, &DataKey::Reserve1);
        if amount_0_out >= reserve_0 || amount_1_out >= reserve_1 {
            return Err(ContractError::InsufficientLiquidity);
        }

        let token_0 = read_token(&e, &DataKey::Token0);
        let token_1 = read_token(&e, &DataKey::Token1);
        let pair = e.current_contract_address();

        // Optimistic transfer; the invariant check below reverts everything.
        if amount_0_out > 0 {
            TokenClient::new(&e, &token_0).transfer(&pair, &to, &amount_0_out);
        }
        if amount_1_out > 0 {
            TokenClient::new(&e, &token_1).transfer(&pair, &to, &amount_1_out);
        }

        let balance_0 = balance_of(&e, &token_0);
        let balance_1 = balance_of(&e, &token_1);

        let remaining_0 = sub_i128(reserve_0, amount_0_out)?;
        let remaining_1 = sub_i128(reserve_1, amount_1_out)?;
        let amount_0_in = if balance_0 > remaining_0 {
            balance_0 - remaining_0
        } else {
            0
        };
        let amount_1_in = if balance_1 > remaining_1 {
            balance_1 - remaining_1
        } else {
            0
        };
        if amount_0_in == 0 && amount_1_in == 0 {
            return Err(ContractError::InsufficientInput);
        }

        let fee = FEE_DENOMINATOR - FEE_NUMERATOR;
        let adjusted_0 = sub_i128(
            mul_i128(balance_0, FEE_DENOMINATOR)?,
            mul_i128(amount_0_in, fee)?,
        )?;
        let adjusted_1 = sub_i128(
            mul_i128(balance_1, FEE_DENOMINATOR)?,
            mul_i128(amount_1_in, fee)?,
        )?;
        let k_before = mul_i128(
            mul_i128(reserve_0, reserve_1)?,
            mul_i128(FEE_DENOMINATOR, FEE_DENOMINATOR)?,
        )?;
        if mul_i128(adjusted_0, adjusted_1)? < k_before {
            return Err(ContractError::ConstantProductViolated);
        }

        e.storage().instance().set(&DataKey::Reserve0, &balance_0);
        e.storage().instance().set(&DataKey::Reserve1, &balance_1);

        e.events().publish(
            (Symbol::new(&e, "pair_swap"), to),
            (amount_0_in, amount_1_in, amount_0_out, amount_1_out),
        );
        Ok(())
    }
}
