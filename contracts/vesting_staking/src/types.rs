use soroban_sdk::{contracttype, Address};

// ─── Stake state ───────────────────────────────────────────────────────────

/// Locked position of a single principal.
///
/// The vesting duration is not stored here: every computation reads the live
/// duration governed by the timelock.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakeRecord {
    /// Total units currently locked.
    pub balance: i128,
    /// Vesting reference point. Only meaningful while `balance > 0`.
    pub timestamp: u64,
}

/// Read model returned by `get_stake`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeInfo {
    pub balance: i128,
    pub timestamp: u64,
    /// Live vesting duration in seconds.
    pub duration: u64,
}

// ─── Timelock state ────────────────────────────────────────────────────────

/// Pending change of the vesting duration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DurationChange {
    Inactive,
    /// Ledger timestamp at or after which the change may be committed.
    Scheduled(u64),
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// * Global configuration and counters live in `instance()`.
/// * Per-account records live in `persistent()` with their own TTL.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Administrator allowed to govern the duration.
    Admin,
    /// Staked token contract address.
    Token,
    /// Live vesting duration in seconds.
    Duration,
    /// Minimum delay accepted by `schedule_duration_change`.
    MinDelay,
    /// Current `DurationChange`.
    DurationChange,
    /// Sum of all stake balances.
    TotalSupply,
    /// Per-principal `StakeRecord`.
    Stake(Address),
    /// principal -> active delegate.
    DelegateOf(Address),
    /// delegate -> represented principal.
    PrincipalOf(Address),
    /// principal -> delegate awaiting acceptance.
    ProposedDelegate(Address),
}
