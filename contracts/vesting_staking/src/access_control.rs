use soroban_sdk::{Address, Env};
use staking_errors::StakingError;

use crate::storage;

/// Fail with `NotInitialized` before `initialize` has run.
pub fn require_initialized(e: &Env) -> Result<(), StakingError> {
    if !storage::is_initialized(e) {
        return Err(StakingError::NotInitialized);
    }
    Ok(())
}

/// Require `caller` to be the stored administrator and to have authorized
/// this invocation.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), StakingError> {
    let admin = storage::get_admin(e)?;
    caller.require_auth();
    if *caller != admin {
        return Err(StakingError::NotAdmin);
    }
    Ok(())
}

pub fn is_admin(e: &Env, caller: &Address) -> bool {
    matches!(storage::get_admin(e), Ok(admin) if admin == *caller)
}
