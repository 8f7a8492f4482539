//! Storage access helpers.
//!
//! | Key                          | Tier           | Lifecycle        |
//! |------------------------------|----------------|------------------|
//! | `Admin`, `Token`, `MinDelay` | `instance()`   | Entire contract  |
//! | `Duration`, `DurationChange` | `instance()`   | Entire contract  |
//! | `TotalSupply`                | `instance()`   | Entire contract  |
//! | `Stake(addr)`                | `persistent()` | Per principal    |
//! | delegation keys              | `persistent()` | Per account      |

use soroban_sdk::{Address, Env};
use staking_errors::StakingError;

use crate::types::DataKey;

/// Minimum ledger TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

/// Bump the instance TTL. Called by every mutating entry point.
pub fn bump_instance(e: &Env) {
    e.storage().instance().extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

/// Read a persistent entry, bumping its TTL when present.
pub fn read_persistent<V>(e: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let storage = e.storage().persistent();
    let value: Option<V> = storage.get(key);
    if value.is_some() {
        storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    }
    value
}

/// Write a persistent entry with a fresh TTL.
pub fn write_persistent<V>(e: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    let storage = e.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn remove_persistent(e: &Env, key: &DataKey) {
    e.storage().persistent().remove(key);
}

// ─── Configuration ─────────────────────────────────────────────────────────

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(e: &Env) -> Result<Address, StakingError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(StakingError::NotInitialized)
}

pub fn get_token(e: &Env) -> Result<Address, StakingError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(StakingError::NotInitialized)
}

pub fn get_duration(e: &Env) -> Result<u64, StakingError> {
    e.storage()
        .instance()
        .get(&DataKey::Duration)
        .ok_or(StakingError::NotInitialized)
}

pub fn set_duration(e: &Env, duration: u64) {
    e.storage().instance().set(&DataKey::Duration, &duration);
}

pub fn get_min_delay(e: &Env) -> Result<u64, StakingError> {
    e.storage()
        .instance()
        .get(&DataKey::MinDelay)
        .ok_or(StakingError::NotInitialized)
}

pub fn get_total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalSupply, &total);
}
