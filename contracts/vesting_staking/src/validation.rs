//! Input validation shared by the ledger and the timelock.
//!
//! ## Constraints
//! - **Amounts** must be strictly positive.
//! - **Durations** must be non-zero; a zero duration would make every stake
//!   instantly and fully available.
//! - **Delays** must be at least the minimum delay configured at
//!   initialization, which itself must be non-zero.

use staking_errors::StakingError;

/// Reject zero and negative amounts.
pub fn validate_amount(amount: i128) -> Result<(), StakingError> {
    if amount <= 0 {
        return Err(StakingError::AmountInvalid);
    }
    Ok(())
}

/// Reject a zero vesting duration.
pub fn validate_duration(duration: u64) -> Result<(), StakingError> {
    if duration == 0 {
        return Err(StakingError::DurationInvalid);
    }
    Ok(())
}

/// Reject a delay shorter than `min_delay`.
pub fn validate_delay(delay: u64, min_delay: u64) -> Result<(), StakingError> {
    if delay < min_delay {
        return Err(StakingError::DelayInvalid);
    }
    Ok(())
}

/// Reject a zero minimum delay at initialization.
pub fn validate_min_delay(min_delay: u64) -> Result<(), StakingError> {
    if min_delay == 0 {
        return Err(StakingError::DelayInvalid);
    }
    Ok(())
}
