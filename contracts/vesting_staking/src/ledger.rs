//! Stake Ledger
//!
//! Owns every `StakeRecord` and the `TotalSupply` counter.
//!
//! ## Vesting
//! A record unlocks linearly from `timestamp` over the live duration:
//! `available = floor(balance * elapsed / duration)`, capped at `balance`
//! once `elapsed >= duration`.
//!
//! ## Re-timestamping
//! Adding `amount` to a nonzero balance moves the reference point forward by
//! `ceil(amount * elapsed / new_balance)`. The vested fraction of the old
//! balance is preserved while the new funds start unvested. The shift is
//! rounded up.

use soroban_sdk::{Address, Env};
use staking_errors::StakingError;

use crate::math;
use crate::storage;
use crate::types::{DataKey, StakeRecord};

// ─── Pure accounting ───────────────────────────────────────────────────────

/// Portion of `record.balance` withdrawable at `now`.
pub fn available_at(record: &StakeRecord, duration: u64, now: u64) -> Result<i128, StakingError> {
    if record.balance == 0 {
        return Ok(0);
    }
    let elapsed = now.saturating_sub(record.timestamp);
    if elapsed >= duration {
        return Ok(record.balance);
    }
    math::mul_div_floor(record.balance, elapsed, duration as i128)
}

/// Record after locking `amount` more at `now`.
pub fn deposit_into(
    record: &StakeRecord,
    amount: i128,
    now: u64,
) -> Result<StakeRecord, StakingError> {
    if record.balance == 0 {
        return Ok(StakeRecord {
            balance: amount,
            timestamp: now,
        });
    }
    let balance = math::add_i128(record.balance, amount)?;
    let elapsed = now.saturating_sub(record.timestamp);
    let shift = math::mul_div_ceil(amount, elapsed, balance)?;
    // shift <= elapsed, so it always fits back into u64.
    let timestamp = math::add_u64(record.timestamp, shift as u64)?;
    Ok(StakeRecord { balance, timestamp })
}

/// Record after withdrawing `amount` at `now`. The reference point is kept.
pub fn withdraw_from(
    record: &StakeRecord,
    amount: i128,
    duration: u64,
    now: u64,
) -> Result<StakeRecord, StakingError> {
    if amount <= 0 || amount > available_at(record, duration, now)? {
        return Err(StakingError::AmountInvalid);
    }
    Ok(StakeRecord {
        balance: math::sub_i128(record.balance, amount)?,
        timestamp: record.timestamp,
    })
}

// ─── Storage ───────────────────────────────────────────────────────────────

/// Stored record for `principal`; an absent record reads as zero balance.
pub fn load(e: &Env, principal: &Address) -> StakeRecord {
    storage::read_persistent(e, &DataKey::Stake(principal.clone())).unwrap_or_default()
}

fn save(e: &Env, principal: &Address, record: &StakeRecord) {
    storage::write_persistent(e, &DataKey::Stake(principal.clone()), record);
}

pub fn balance_of(e: &Env, principal: &Address) -> i128 {
    load(e, principal).balance
}

pub fn available(e: &Env, principal: &Address) -> Result<i128, StakingError> {
    let duration = storage::get_duration(e)?;
    available_at(&load(e, principal), duration, e.ledger().timestamp())
}

/// Validate and compute a deposit without writing anything.
/// Returns the updated record and the new total supply.
pub fn prepare_credit(
    e: &Env,
    principal: &Address,
    amount: i128,
    now: u64,
) -> Result<(StakeRecord, i128), StakingError> {
    let updated = deposit_into(&load(e, principal), amount, now)?;
    let total = math::add_i128(storage::get_total_supply(e), amount)?;
    Ok((updated, total))
}

/// Validate and compute a withdrawal without writing anything.
/// Returns the updated record and the new total supply.
pub fn prepare_debit(
    e: &Env,
    principal: &Address,
    amount: i128,
    now: u64,
) -> Result<(StakeRecord, i128), StakingError> {
    let duration = storage::get_duration(e)?;
    let updated = withdraw_from(&load(e, principal), amount, duration, now)?;
    let total = math::sub_i128(storage::get_total_supply(e), amount)?;
    Ok((updated, total))
}

/// Persist a record and total computed by `prepare_credit` or `prepare_debit`.
pub fn commit(e: &Env, principal: &Address, record: &StakeRecord, total: i128) {
    save(e, principal, record);
    storage::set_total_supply(e, total);
}
