//! Delegation Registry
//!
//! Per principal: `NoDelegate -> Proposed -> Linked -> NoDelegate`.
//!
//! The link is held in two independent one-to-one maps, `DelegateOf` and
//! `PrincipalOf`, written together only by this module. A linked delegate is
//! an operating key for its principal: ledger operations it submits apply to
//! the principal's record while tokens move to and from the delegate's own
//! address.

use soroban_sdk::{Address, Env};
use staking_errors::StakingError;

use crate::events;
use crate::ledger;
use crate::storage;
use crate::types::DataKey;

pub fn delegate_of(e: &Env, principal: &Address) -> Option<Address> {
    storage::read_persistent(e, &DataKey::DelegateOf(principal.clone()))
}

pub fn principal_of(e: &Env, delegate: &Address) -> Option<Address> {
    storage::read_persistent(e, &DataKey::PrincipalOf(delegate.clone()))
}

pub fn proposed_delegate_of(e: &Env, principal: &Address) -> Option<Address> {
    storage::read_persistent(e, &DataKey::ProposedDelegate(principal.clone()))
}

/// Principal whose record `caller` operates on.
pub fn resolve(e: &Env, caller: &Address) -> Address {
    principal_of(e, caller).unwrap_or_else(|| caller.clone())
}

/// Principal credited when `caller` stakes on behalf of `target`.
///
/// A delegate caller always stakes for its own principal. A target that is
/// itself a linked delegate is redirected to its principal so delegates never
/// hold a balance of their own.
pub fn resolve_target(e: &Env, caller: &Address, target: &Address) -> Address {
    if let Some(principal) = principal_of(e, caller) {
        return principal;
    }
    resolve(e, target)
}

/// Nominate `delegate` for `principal`. Overwrites any pending proposal.
pub fn propose(e: &Env, principal: &Address, delegate: &Address) -> Result<(), StakingError> {
    if ledger::balance_of(e, delegate) != 0 {
        return Err(StakingError::DelegateStaked);
    }
    if delegate_of(e, principal).is_some() {
        return Err(StakingError::SenderHasDelegate);
    }
    if principal_of(e, delegate).is_some() {
        return Err(StakingError::DelegateTaken);
    }
    ensure_no_chain(e, principal, delegate)?;

    storage::write_persistent(e, &DataKey::ProposedDelegate(principal.clone()), delegate);
    events::emit_delegate_proposed(e, principal, delegate);
    Ok(())
}

/// Accept a pending nomination, creating the bidirectional link.
pub fn accept(e: &Env, delegate: &Address, principal: &Address) -> Result<(), StakingError> {
    if proposed_delegate_of(e, principal).as_ref() != Some(delegate) {
        return Err(StakingError::DelegateNotProposed);
    }
    if principal_of(e, delegate).is_some() {
        return Err(StakingError::DelegateTaken);
    }
    // Either side may have joined another link since the proposal.
    ensure_no_chain(e, principal, delegate)?;
    // Balances may have changed since the proposal.
    if ledger::balance_of(e, delegate) != 0 || ledger::balance_of(e, principal) != 0 {
        return Err(StakingError::DelegateStaked);
    }

    storage::write_persistent(e, &DataKey::DelegateOf(principal.clone()), delegate);
    storage::write_persistent(e, &DataKey::PrincipalOf(delegate.clone()), principal);
    storage::remove_persistent(e, &DataKey::ProposedDelegate(principal.clone()));
    events::emit_delegate_set(e, principal, delegate);
    Ok(())
}

/// Links never chain: a principal cannot itself be a linked delegate, and a
/// delegate cannot itself have a delegate. Self-links are rejected too.
fn ensure_no_chain(e: &Env, principal: &Address, delegate: &Address) -> Result<(), StakingError> {
    if principal == delegate
        || principal_of(e, principal).is_some()
        || delegate_of(e, delegate).is_some()
    {
        return Err(StakingError::DelegateTaken);
    }
    Ok(())
}

/// Remove the active link between `principal` and `delegate`.
pub fn unset(e: &Env, principal: &Address, delegate: &Address) -> Result<(), StakingError> {
    if delegate_of(e, principal).as_ref() != Some(delegate) {
        return Err(StakingError::DelegateNotSet);
    }

    storage::remove_persistent(e, &DataKey::DelegateOf(principal.clone()));
    storage::remove_persistent(e, &DataKey::PrincipalOf(delegate.clone()));
    events::emit_delegate_unset(e, principal, delegate);
    Ok(())
}
