//! Duration Timelock
//!
//! Enforces a mandatory delay before a new vesting duration takes effect.
//! `Inactive -> Scheduled(effective_at) -> Inactive`, leaving `Scheduled`
//! through either commit or cancel.
//!
//! Every stake's available balance depends on the live duration, so stakers
//! get at least `min_delay` of notice before it changes.

use soroban_sdk::Env;
use staking_errors::StakingError;

use crate::events;
use crate::math;
use crate::storage;
use crate::types::{DataKey, DurationChange};
use crate::validation;

impl DurationChange {
    /// State after scheduling a change `delay` seconds from `now`.
    pub fn schedule(&self, now: u64, delay: u64, min_delay: u64) -> Result<Self, StakingError> {
        validation::validate_delay(delay, min_delay)?;
        match self {
            DurationChange::Scheduled(_) => Err(StakingError::TimelockActive),
            DurationChange::Inactive => Ok(DurationChange::Scheduled(math::add_u64(now, delay)?)),
        }
    }

    /// Check that a scheduled change may be committed at `now`.
    /// Returns the effective timestamp on success.
    pub fn ready(&self, now: u64) -> Result<u64, StakingError> {
        match *self {
            DurationChange::Inactive => Err(StakingError::TimelockInactive),
            DurationChange::Scheduled(effective_at) if now < effective_at => {
                Err(StakingError::Timelocked)
            }
            DurationChange::Scheduled(effective_at) => Ok(effective_at),
        }
    }

    /// Effective timestamp of the pending change, if any.
    pub fn pending(&self) -> Result<u64, StakingError> {
        match *self {
            DurationChange::Inactive => Err(StakingError::TimelockInactive),
            DurationChange::Scheduled(effective_at) => Ok(effective_at),
        }
    }
}

pub fn load(e: &Env) -> DurationChange {
    e.storage()
        .instance()
        .get(&DataKey::DurationChange)
        .unwrap_or(DurationChange::Inactive)
}

fn save(e: &Env, change: &DurationChange) {
    e.storage().instance().set(&DataKey::DurationChange, change);
}

/// Schedule a duration change `delay` seconds from now.
/// Returns the timestamp at which it may be committed.
pub fn schedule(e: &Env, delay: u64) -> Result<u64, StakingError> {
    let now = e.ledger().timestamp();
    let min_delay = storage::get_min_delay(e)?;
    let next = load(e).schedule(now, delay, min_delay)?;
    let effective_at = next.pending()?;
    save(e, &next);
    events::emit_duration_change_scheduled(e, delay, effective_at);
    Ok(effective_at)
}

/// Commit `new_duration` once the scheduled delay has elapsed.
pub fn commit(e: &Env, new_duration: u64) -> Result<(), StakingError> {
    let now = e.ledger().timestamp();
    load(e).ready(now)?;
    validation::validate_duration(new_duration)?;

    let old_duration = storage::get_duration(e)?;
    storage::set_duration(e, new_duration);
    save(e, &DurationChange::Inactive);
    events::emit_duration_changed(e, old_duration, new_duration);
    Ok(())
}

/// Drop the pending change without touching the duration.
pub fn cancel(e: &Env) -> Result<(), StakingError> {
    let effective_at = load(e).pending()?;
    save(e, &DurationChange::Inactive);
    events::emit_duration_change_cancelled(e, effective_at);
    Ok(())
}
