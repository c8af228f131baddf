use soroban_sdk::{contracttype, Address, Vec};

/// A lock-period choice offered to depositors. Fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleOption {
    /// Seconds over which the purchases vest.
    pub lock_period: u64,
    /// Number of equal tranches the deposit is spent in. At least 1.
    pub num_of_purchases: u32,
    /// Bonus on each tranche's output, in tenths of a percent (125 = 12.5 %).
    pub reward_bonus: u32,
}

/// A locked base-asset amount and its purchase progress.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub depositor: Address,
    pub amount_deposited: i128,
    /// Index into the option table.
    pub option: u32,
    pub deposited_at: u64,
    pub purchases_made: u32,
}

/// One deposit's successful settlement step.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchaseReceipt {
    pub deposit_index: u32,
    pub purchases: u32,
    pub amount_in: i128,
    /// Sale token the depositor's balance actually grew by.
    pub amount_out: i128,
    /// Bonus earned on `amount_out`.
    pub reward: i128,
    /// Part of `reward` the reserve could not cover, owed to the depositor.
    pub reward_deferred: i128,
}

/// A deposit skipped during bulk settlement because its swap failed.
///
/// `error_code` is the raw code the adapter raised, so codes from foreign
/// adapters that `ContractError` does not know are kept as-is. Token errors
/// (codes 1-13) that surface through the adapter are kept raw too.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchaseFailure {
    pub deposit_index: u32,
    pub error_code: u32,
}

/// Outcome of `complete_outstanding_purchases`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementReport {
    /// Deposits that completed at least one purchase.
    pub deposits_settled: u32,
    /// Total purchases completed across all deposits.
    pub purchases_made: u32,
    /// Rewards earned in this run that were added to depositors' owed balances.
    pub rewards_deferred: i128,
    pub failures: Vec<PurchaseFailure>,
}

/// Storage keys.
///
/// * `Admin` .. `TotalRewardOwed` live in `instance()`: small, global, always read.
/// * `Deposit(index)`, `UserDeposits(account)`, `ActiveDeposits` and
///   `RewardOwed(account)` live in `persistent()`: they grow with usage and
///   carry their own TTL.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    DexAdapter,
    BaseToken,
    SaleToken,
    Options,
    DepositCount,
    Lock,
    TotalRewardOwed,
    Deposit(u32),
    UserDeposits(Address),
    ActiveDeposits,
    RewardOwed(Address),
}
