//! Token custody helpers for the staking contract.
//! Centralizes the token client and both transfer directions.
//!
//! Transfers go through the client's `try_*` calls: a rejected transfer is
//! reported as `StakingError::TransferFailed` so the caller can abort before
//! touching ledger state.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, Address, Env};
use staking_errors::StakingError;

use crate::storage;

fn token_client(e: &Env) -> Result<TokenClient<'_>, StakingError> {
    let token = storage::get_token(e)?;
    Ok(TokenClient::new(e, &token))
}

/// Pull `amount` from `from` into the contract.
/// `from` must have approved the contract as spender.
pub fn pull_into_contract(e: &Env, from: &Address, amount: i128) -> Result<(), StakingError> {
    let client = token_client(e)?;
    let contract = e.current_contract_address();
    match client.try_transfer_from(&contract, from, &contract, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(e, "inbound transfer rejected", from.clone(), amount);
            Err(StakingError::TransferFailed)
        }
    }
}

/// Push `amount` from the contract to `to`.
pub fn push_from_contract(e: &Env, to: &Address, amount: i128) -> Result<(), StakingError> {
    let client = token_client(e)?;
    let contract = e.current_contract_address();
    match client.try_transfer(&contract, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(e, "outbound transfer rejected", to.clone(), amount);
            Err(StakingError::TransferFailed)
        }
    }
}

/// Token balance currently held by the contract.
pub fn custody_balance(e: &Env) -> Result<i128, StakingError> {
    let client = token_client(e)?;
    Ok(client.balance(&e.current_contract_address()))
}
