//! Vesting Staking Contract
//!
//! Custodial staking ledger where a locked balance becomes withdrawable
//! linearly over a vesting duration.
//!
//! ## Key design decisions
//!
//! - **Live duration**: every stake vests against the current duration, which
//!   only changes through the schedule/commit timelock.
//! - **Weighted re-timestamping**: topping up moves the vesting reference
//!   point forward in proportion to the amount added, rounded up.
//! - **Delegation**: a principal may link one delegate that stakes and
//!   unstakes on its behalf using the delegate's own tokens.
//! - **Validate, transfer, then write**: every check and the token transfer
//!   run before storage is touched, so a failed call leaves no trace.

#![no_std]

mod access_control;
mod delegation;
mod events;
mod ledger;
mod math;
mod storage;
mod timelock;
mod token_integration;
mod types;
mod validation;

pub use staking_errors::{ErrorCategory, ErrorExt, StakingError};
pub use types::{DataKey, DurationChange, StakeInfo, StakeRecord};

use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct VestingStaking;

#[contractimpl]
impl VestingStaking {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called twice
    /// * `DurationInvalid` - `duration == 0`
    /// * `DelayInvalid` - `min_delay == 0`
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        duration: u64,
        min_delay: u64,
    ) -> Result<(), StakingError> {
        if storage::is_initialized(&e) {
            return Err(StakingError::AlreadyInitialized);
        }
        validation::validate_duration(duration)?;
        validation::validate_min_delay(min_delay)?;

        let instance = e.storage().instance();
        instance.set(&DataKey::Admin, &admin);
        instance.set(&DataKey::Token, &token);
        instance.set(&DataKey::Duration, &duration);
        instance.set(&DataKey::MinDelay, &min_delay);
        instance.set(&DataKey::DurationChange, &DurationChange::Inactive);
        instance.set(&DataKey::TotalSupply, &0_i128);
        storage::bump_instance(&e);

        events::emit_initialized(&e, &admin, &token, duration, min_delay);
        Ok(())
    }

    // ── Staking ────────────────────────────────────────────────────────────

    /// Lock `amount` for the caller, or for the caller's principal when the
    /// caller is a linked delegate. Tokens are pulled from `caller`.
    pub fn stake(e: Env, caller: Address, amount: i128) -> Result<(), StakingError> {
        Self::deposit(&e, &caller, &caller, amount)
    }

    /// Lock `amount` for `principal`, paid by `caller`.
    pub fn stake_for(
        e: Env,
        caller: Address,
        principal: Address,
        amount: i128,
    ) -> Result<(), StakingError> {
        Self::deposit(&e, &caller, &principal, amount)
    }

    /// Withdraw `amount` of the available balance to `caller`.
    ///
    /// A linked delegate withdraws from its principal's stake and receives
    /// the tokens itself.
    ///
    /// # Errors
    /// * `AmountInvalid` - `amount <= 0` or above the available balance
    /// * `TransferFailed` - the token contract rejected the payout
    pub fn unstake(e: Env, caller: Address, amount: i128) -> Result<(), StakingError> {
        access_control::require_initialized(&e)?;
        caller.require_auth();
        let now = e.ledger().timestamp();

        let principal = delegation::resolve(&e, &caller);
        let (record, total) = ledger::prepare_debit(&e, &principal, amount, now)?;
        token_integration::push_from_contract(&e, &caller, amount)?;
        ledger::commit(&e, &principal, &record, total);
        storage::bump_instance(&e);

        events::emit_unstaked(&e, &principal, &caller, amount, record.balance);
        Ok(())
    }

    // ── Ledger views ───────────────────────────────────────────────────────

    /// Balance of `principal` withdrawable right now.
    pub fn available(e: Env, principal: Address) -> Result<i128, StakingError> {
        ledger::available(&e, &principal)
    }

    /// Full locked balance of `principal`.
    pub fn balance_of(e: Env, principal: Address) -> i128 {
        ledger::balance_of(&e, &principal)
    }

    /// Sum of all locked balances.
    pub fn total_supply(e: Env) -> i128 {
        storage::get_total_supply(&e)
    }

    /// Token balance held by the contract, as reported by the token.
    pub fn custody_balance(e: Env) -> Result<i128, StakingError> {
        token_integration::custody_balance(&e)
    }

    pub fn get_stake(e: Env, principal: Address) -> Result<StakeInfo, StakingError> {
        let duration = storage::get_duration(&e)?;
        let record = ledger::load(&e, &principal);
        Ok(StakeInfo {
            balance: record.balance,
            timestamp: record.timestamp,
            duration,
        })
    }

    // ── Delegation ─────────────────────────────────────────────────────────

    /// # Errors
    /// * `DelegateStaked` - `delegate` has a staked balance
    /// * `SenderHasDelegate` - `principal` already has a delegate
    /// * `DelegateTaken` - `delegate` already represents a principal
    pub fn propose_delegate(
        e: Env,
        principal: Address,
        delegate: Address,
    ) -> Result<(), StakingError> {
        access_control::require_initialized(&e)?;
        principal.require_auth();
        delegation::propose(&e, &principal, &delegate)?;
        storage::bump_instance(&e);
        Ok(())
    }

    /// # Errors
    /// * `DelegateNotProposed` - `principal` has not proposed `delegate`
    /// * `DelegateTaken` - `delegate` has since linked to another principal
    /// * `DelegateStaked` - either side has a staked balance
    pub fn accept_delegate(
        e: Env,
        delegate: Address,
        principal: Address,
    ) -> Result<(), StakingError> {
        access_control::require_initialized(&e)?;
        delegate.require_auth();
        delegation::accept(&e, &delegate, &principal)?;
        storage::bump_instance(&e);
        Ok(())
    }

    /// # Errors
    /// * `DelegateNotSet` - `delegate` is not `principal`'s delegate
    pub fn unset_delegate(
        e: Env,
        principal: Address,
        delegate: Address,
    ) -> Result<(), StakingError> {
        access_control::require_initialized(&e)?;
        principal.require_auth();
        delegation::unset(&e, &principal, &delegate)?;
        storage::bump_instance(&e);
        Ok(())
    }

    pub fn delegate_of(e: Env, principal: Address) -> Option<Address> {
        delegation::delegate_of(&e, &principal)
    }

    pub fn proposed_delegate_of(e: Env, principal: Address) -> Option<Address> {
        delegation::proposed_delegate_of(&e, &principal)
    }

    pub fn principal_of(e: Env, delegate: Address) -> Option<Address> {
        delegation::principal_of(&e, &delegate)
    }

    // ── Duration timelock ──────────────────────────────────────────────────

    /// Schedule a duration change that may be committed after `delay` seconds.
    /// Returns the effective timestamp.
    ///
    /// # Errors
    /// * `NotAdmin`
    /// * `DelayInvalid` - `delay` below the minimum delay
    /// * `TimelockActive` - a change is already scheduled
    pub fn schedule_duration_change(
        e: Env,
        admin: Address,
        delay: u64,
    ) -> Result<u64, StakingError> {
        access_control::require_admin(&e, &admin)?;
        let effective_at = timelock::schedule(&e, delay)?;
        storage::bump_instance(&e);
        Ok(effective_at)
    }

    /// Commit `new_duration` for the scheduled change.
    ///
    /// # Errors
    /// * `NotAdmin`
    /// * `TimelockInactive` - nothing scheduled
    /// * `Timelocked` - scheduled delay has not elapsed
    /// * `DurationInvalid` - `new_duration == 0`
    pub fn set_duration(e: Env, admin: Address, new_duration: u64) -> Result<(), StakingError> {
        access_control::require_admin(&e, &admin)?;
        timelock::commit(&e, new_duration)?;
        storage::bump_instance(&e);
        Ok(())
    }

    /// # Errors
    /// * `NotAdmin`
    /// * `TimelockInactive` - nothing scheduled
    pub fn cancel_duration_change(e: Env, admin: Address) -> Result<(), StakingError> {
        access_control::require_admin(&e, &admin)?;
        timelock::cancel(&e)?;
        storage::bump_instance(&e);
        Ok(())
    }

    pub fn get_duration_change(e: Env) -> DurationChange {
        timelock::load(&e)
    }

    // ── Configuration views ────────────────────────────────────────────────

    pub fn get_duration(e: Env) -> Result<u64, StakingError> {
        storage::get_duration(&e)
    }

    pub fn get_min_delay(e: Env) -> Result<u64, StakingError> {
        storage::get_min_delay(&e)
    }

    pub fn get_admin(e: Env) -> Result<Address, StakingError> {
        storage::get_admin(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, StakingError> {
        storage::get_token(&e)
    }

    pub fn is_admin(e: Env, account: Address) -> bool {
        access_control::is_admin(&e, &account)
    }
}

impl VestingStaking {
    /// Shared body of `stake` and `stake_for`.
    ///
    /// # Errors
    /// * `AmountInvalid` - `amount <= 0`
    /// * `TransferFailed` - `caller` has not approved or cannot cover `amount`
    fn deposit(
        e: &Env,
        caller: &Address,
        target: &Address,
        amount: i128,
    ) -> Result<(), StakingError> {
        access_control::require_initialized(e)?;
        caller.require_auth();
        validation::validate_amount(amount)?;
        let now = e.ledger().timestamp();

        let principal = delegation::resolve_target(e, caller, target);
        let (record, total) = ledger::prepare_credit(e, &principal, amount, now)?;
        token_integration::pull_into_contract(e, caller, amount)?;
        ledger::commit(e, &principal, &record, total);
        storage::bump_instance(e);

        events::emit_staked(e, &principal, caller, amount, record.balance);
        Ok(())
    }
}



#[cfg(test)]
mod test_stake;
