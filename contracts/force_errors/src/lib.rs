#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and keeper retry logic.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract storage has not been set up (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Argument and invariant validation errors (codes 200-299).
    Validation,
    /// Swap, pool and token transfer errors (codes 300-399).
    Liquidity,
    /// Settlement engine errors (codes 400-499).
    Settlement,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by the sale contract, both DEX adapters
///         and the reference pools.
/// @dev    Codes are wire-stable and cross contract boundaries unchanged: an
///         adapter failing with `InsufficientInput` is decoded as
///         `InsufficientInput` by the sale contract. Never renumber a variant;
///         append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Validation
///   300 - 399 : Liquidity
///   400 - 499 : Settlement
///   700 - 799 : Arithmetic
///
/// The Stellar Asset Contract raises codes 1-13. No variant reuses them, so a
/// token error that surfaces through an adapter keeps an unambiguous code.
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// A required instance storage entry is missing.
    /// Contracts: sale, adapters, pools
    NotInitialized = 50,

    // --- Authorization (100-199) ---
    /// Caller is not the privileged owner.
    /// Contracts: sale
    Unauthorized = 100,

    // --- Validation (200-299) ---
    /// Option index does not exist, or an option fails construction checks.
    /// Contracts: sale
    InvalidOption = 200,

    /// Index is past the end of the option table or deposit registry.
    /// Contracts: sale
    OutOfRange = 201,

    /// Amount must be strictly positive.
    /// Contracts: sale, adapters
    ZeroAmount = 202,

    /// Deposit is smaller than the option's purchase count, so a single
    /// purchase would swap nothing.
    /// Contracts: sale
    DepositTooSmall = 203,

    /// Square-root price limit is out of bounds or on the wrong side of the
    /// current pool price.
    /// Contracts: concentrated-liquidity adapter, pools
    InvalidPriceLimit = 204,

    /// Input and output token are the same asset.
    /// Contracts: adapters, pools
    IdenticalTokens = 205,

    /// Purchase counter would exceed the option's purchase count.
    /// Contracts: sale
    PurchasesExceeded = 206,

    // --- Liquidity (300-399) ---
    /// Funding account balance or allowance does not cover the swap input.
    /// Contracts: adapters, pools
    InsufficientInput = 300,

    /// No pool is registered for the token pair.
    /// Contracts: adapters
    RouteUnavailable = 301,

    /// Pool reserves cannot serve the swap.
    /// Contracts: adapters, pools
    InsufficientLiquidity = 302,

    /// Quoted output rounds down to zero.
    /// Contracts: adapters, pools
    InsufficientOutputAmount = 303,

    /// Swap would move the price past the supplied limit.
    /// Contracts: pools
    PriceLimitExceeded = 304,

    /// Underlying swap failed without a recognised error code.
    /// Contracts: sale, adapters
    SwapFailed = 305,

    /// Post-swap balances break the constant-product invariant.
    /// Contracts: pools
    ConstantProductViolated = 306,

    /// Depositor allowance or balance does not cover the deposit.
    /// Contracts: sale
    InsufficientAllowance = 307,

    // --- Settlement (400-499) ---
    /// Reentrancy was detected; the call is rejected.
    /// Contracts: sale
    ReentrancyDetected = 400,

    /// Sale-token balance held for rewards cannot cover a reward payment.
    /// Contracts: sale
    InsufficientRewardReserve = 401,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,

    /// Division by zero detected during a checked arithmetic operation.
    DivisionByZero = 701,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;

    /// @return true when retrying the same call later may succeed
    ///         (liquidity conditions can change between keeper runs).
    fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Liquidity
    }
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized => ErrorCategory::Initialization,

            ContractError::Unauthorized => ErrorCategory::Authorization,

            ContractError::InvalidOption
            | ContractError::OutOfRange
            | ContractError::ZeroAmount
            | ContractError::DepositTooSmall
            | ContractError::InvalidPriceLimit
            | ContractError::IdenticalTokens
            | ContractError::PurchasesExceeded => ErrorCategory::Validation,

            ContractError::InsufficientInput
            | ContractError::RouteUnavailable
            | ContractError::InsufficientLiquidity
            | ContractError::InsufficientOutputAmount
            | ContractError::PriceLimitExceeded
            | ContractError::SwapFailed
            | ContractError::ConstantProductViolated
            | ContractError::InsufficientAllowance => ErrorCategory::Liquidity,

            ContractError::ReentrancyDetected | ContractError::InsufficientRewardReserve => {
                ErrorCategory::Settlement
            }

            ContractError::Overflow | ContractError::DivisionByZero => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract storage has not been initialized",
            ContractError::Unauthorized => "Caller is not the privileged owner",
            ContractError::InvalidOption => "Sale option is unknown or malformed",
            ContractError::OutOfRange => "Index is out of range",
            ContractError::ZeroAmount => "Amount must be strictly positive (> 0)",
            ContractError::DepositTooSmall => {
                "Deposit is smaller than the option's number of purchases"
            }
            ContractError::InvalidPriceLimit => "Square-root price limit is not admissible",
            ContractError::IdenticalTokens => "Input and output tokens are identical",
            ContractError::PurchasesExceeded => "Purchases made would exceed the option total",
            ContractError::InsufficientInput => "Insufficient input balance or allowance",
            ContractError::RouteUnavailable => "No pool exists for the token pair",
            ContractError::InsufficientLiquidity => "Pool liquidity cannot serve the swap",
            ContractError::InsufficientOutputAmount => "Swap output rounds down to zero",
            ContractError::PriceLimitExceeded => "Swap would cross the price limit",
            ContractError::SwapFailed => "Underlying swap failed",
            ContractError::ConstantProductViolated => "Constant-product invariant violated",
            ContractError::InsufficientAllowance => {
                "Depositor allowance or balance does not cover the deposit"
            }
            ContractError::ReentrancyDetected => "Reentrancy detected; call rejected",
            ContractError::InsufficientRewardReserve => {
                "Reward reserve cannot cover the reward payment"
            }
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::DivisionByZero => "Division by zero in checked arithmetic",
        }
    }
}
