#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by the component that raises them.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `StakingError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (codes 1-99).
    Initialization,
    /// Caller permission errors (codes 100-199).
    Authorization,
    /// Stake ledger and asset transfer errors (codes 200-299).
    Ledger,
    /// Delegation state machine errors (codes 300-399).
    Delegation,
    /// Duration timelock state machine errors (codes 400-499).
    Timelock,
    /// Checked arithmetic errors (codes 700-799).
    Arithmetic,
}

/// @title  StakingError
/// @notice Error enum returned by every fallible entry point of the staking contract.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Ledger
///   300 - 399 : Delegation
///   400 - 499 : Timelock
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakingError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the administrator.
    NotAdmin = 100,

    // --- Ledger (200-299) ---
    /// Amount is zero, negative, or exceeds the available balance.
    AmountInvalid = 200,

    /// The token contract rejected an inbound or outbound transfer.
    TransferFailed = 201,

    // --- Delegation (300-399) ---
    /// Delegate is already linked to a principal.
    DelegateTaken = 300,

    /// Principal already has an active delegate.
    SenderHasDelegate = 301,

    /// Delegate (or accepting principal) holds a staked balance.
    DelegateStaked = 302,

    /// No pending proposal names this delegate for this principal.
    DelegateNotProposed = 303,

    /// No active link exists between this principal and delegate.
    DelegateNotSet = 304,

    // --- Timelock (400-499) ---
    /// Delay is below the configured minimum.
    DelayInvalid = 400,

    /// A duration change is already scheduled.
    TimelockActive = 401,

    /// The scheduled duration change is not yet effective.
    Timelocked = 402,

    /// No duration change is scheduled.
    TimelockInactive = 403,

    /// Vesting duration must be greater than zero.
    DurationInvalid = 404,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every StakingError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for StakingError {
    fn category(&self) -> ErrorCategory {
        match self {
            StakingError::NotInitialized | StakingError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            StakingError::NotAdmin => ErrorCategory::Authorization,

            StakingError::AmountInvalid | StakingError::TransferFailed => ErrorCategory::Ledger,

            StakingError::DelegateTaken
            | StakingError::SenderHasDelegate
            | StakingError::DelegateStaked
            | StakingError::DelegateNotProposed
            | StakingError::DelegateNotSet => ErrorCategory::Delegation,

            StakingError::DelayInvalid
            | StakingError::TimelockActive
            | StakingError::Timelocked
            | StakingError::TimelockInactive
            | StakingError::DurationInvalid => ErrorCategory::Timelock,

            StakingError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            StakingError::NotInitialized => "Contract has not been initialized",
            StakingError::AlreadyInitialized => "Contract has already been initialized",
            StakingError::NotAdmin => "Caller is not the admin",
            StakingError::AmountInvalid => "Amount is zero or exceeds the available balance",
            StakingError::TransferFailed => "Token transfer was rejected",
            StakingError::DelegateTaken => "Delegate is already linked to a principal",
            StakingError::SenderHasDelegate => "Principal already has a delegate",
            StakingError::DelegateStaked => "Account has a staked balance",
            StakingError::DelegateNotProposed => "Delegate was not proposed by this principal",
            StakingError::DelegateNotSet => "Delegate is not set for this principal",
            StakingError::DelayInvalid => "Delay is below the minimum delay",
            StakingError::TimelockActive => "A duration change is already scheduled",
            StakingError::Timelocked => "Scheduled duration change is not yet effective",
            StakingError::TimelockInactive => "No duration change is scheduled",
            StakingError::DurationInvalid => "Duration must be greater than zero",
            StakingError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}
