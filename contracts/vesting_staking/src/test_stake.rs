//! Contract-level tests for initialization, stake, unstake and the ledger views.

#![cfg(test)]

use crate::test_helpers::*;
use crate::{DurationChange, StakingError, VestingStaking, VestingStakingClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};

// ═══════════════════════════════════════════════════════════════════
// 1. Initialization
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_initialize_stores_configuration() {
    let e = Env::default();
    let (client, admin, _staker, token, _cid) = setup(&e);

    assert_eq!(client.get_admin(), admin);
    assert_eq!(client.get_token(), token);
    assert_eq!(client.get_duration(), DURATION);
    assert_eq!(client.get_min_delay(), MIN_DELAY);
    assert_eq!(client.total_supply(), 0);
    assert!(client.is_admin(&admin));
}

#[test]
fn test_initialize_twice_fails() {
    let e = Env::default();
    let (client, admin, _staker, token, _cid) = setup(&e);
    assert_eq!(
        client.try_initialize(&admin, &token, &DURATION, &MIN_DELAY),
        Err(Ok(StakingError::AlreadyInitialized))
    );
}

#[test]
fn test_initialize_rejects_zero_duration_and_delay() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(VestingStaking, ());
    let client = VestingStakingClient::new(&e, &contract_id);
    let admin = Address::generate(&e);
    let token = Address::generate(&e);

    assert_eq!(
        client.try_initialize(&admin, &token, &0, &MIN_DELAY),
        Err(Ok(StakingError::DurationInvalid))
    );
    assert_eq!(
        client.try_initialize(&admin, &token, &DURATION, &0),
        Err(Ok(StakingError::DelayInvalid))
    );
    client.initialize(&admin, &token, &DURATION, &MIN_DELAY);
}

#[test]
fn test_calls_before_initialize_fail() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(VestingStaking, ());
    let client = VestingStakingClient::new(&e, &contract_id);
    let user = Address::generate(&e);

    assert_eq!(
        client.try_stake(&user, &10),
        Err(Ok(StakingError::NotInitialized))
    );
    assert_eq!(
        client.try_unstake(&user, &10),
        Err(Ok(StakingError::NotInitialized))
    );
    assert_eq!(
        client.try_available(&user),
        Err(Ok(StakingError::NotInitialized))
    );
    assert_eq!(
        client.try_schedule_duration_change(&user, &MIN_DELAY),
        Err(Ok(StakingError::NotInitialized))
    );
    assert_eq!(
        client.try_propose_delegate(&user, &Address::generate(&e)),
        Err(Ok(StakingError::NotInitialized))
    );
    assert_eq!(client.try_get_stake(&user), Err(Ok(StakingError::NotInitialized)));
    assert_eq!(client.try_get_admin(), Err(Ok(StakingError::NotInitialized)));
}

#[test]
fn test_counter_and_map_views_before_initialize_are_empty() {
    let e = Env::default();
    let contract_id = e.register(VestingStaking, ());
    let client = VestingStakingClient::new(&e, &contract_id);
    let user = Address::generate(&e);

    assert_eq!(client.balance_of(&user), 0);
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.delegate_of(&user), None);
    assert_eq!(client.principal_of(&user), None);
    assert_eq!(client.proposed_delegate_of(&user), None);
    assert!(!client.is_admin(&user));
    assert_eq!(client.get_duration_change(), DurationChange::Inactive);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Staking
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_stake_creates_record_and_moves_tokens() {
    let e = Env::default();
    let (client, _admin, staker, token, contract_id) = setup(&e);

    client.stake(&staker, &100);

    let stake = client.get_stake(&staker);
    assert_eq!(stake.balance, 100);
    assert_eq!(stake.timestamp, START);
    assert_eq!(stake.duration, DURATION);
    assert_eq!(client.balance_of(&staker), 100);
    assert_eq!(client.total_supply(), 100);
    assert_eq!(token_balance(&e, &token, &staker), DEFAULT_MINT - 100);
    assert_eq!(token_balance(&e, &token, &contract_id), 100);
}

#[test]
fn test_available_zero_right_after_stake() {
    let e = Env::default();
    let (client, _admin, staker, _token, _cid) = setup(&e);
    client.stake(&staker, &5_000);
    assert_eq!(client.available(&staker), 0);
}

#[test]
fn test_available_full_after_duration() {
    let e = Env::default();
    let (client, _admin, staker, _token, _cid) = setup(&e);
    client.stake(&staker, &5_000);

    advance(&e, DURATION);
    assert_eq!(client.available(&staker), 5_000);
    advance(&e, 10 * DURATION);
    assert_eq!(client.available(&staker), 5_000);
}

#[test]
fn test_stake_zero_or_negative_fails() {
    let e = Env::default();
    let (client, _admin, staker, _token, _cid) = setup(&e);
    assert_eq!(
        client.try_stake(&staker, &0),
        Err(Ok(StakingError::AmountInvalid))
    );
    assert_eq!(
        client.try_stake(&staker, &-1),
        Err(Ok(StakingError::AmountInvalid))
    );
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_topup_retimestamps_reference_scenario() {
    let e = Env::default();
    let (client, _admin, staker, _token, _cid) = setup(&e);

    client.stake(&staker, &100);
    advance(&e, 100);
    client.stake(&staker, &120);

    let stake = client.get_stake(&staker);
    assert_eq!(stake.balance, 220);
    assert_eq!(stake.timestamp, START + 55);
}

#[test]
fn test_stake_after_full_withdrawal_starts_fresh() {
    let e = Env::default();
    let (client, _admin, staker, _token, _cid) = setup(&e);

    client.stake(&staker, &100);
    advance(&e, DURATION);
    client.unstake(&staker, &100);
    assert_eq!(client.balance_of(&staker), 0);

    advance(&e, 7);
    client.stake(&staker, &40);
    let stake = client.get_stake(&staker);
    assert_eq!(stake.balance, 40);
    assert_eq!(stake.timestamp, START + DURATION + 7);
    assert_eq!(client.available(&staker), 0);
}

#[test]
fn test_stake_for_credits_principal_and_debits_payer() {
    let e = Env::default();
    let (client, _admin, payer, token, _cid) = setup(&e);
    let beneficiary = Address::generate(&e);

    client.stake_for(&payer, &beneficiary, &300);

    assert_eq!(client.balance_of(&beneficiary), 300);
    assert_eq!(client.balance_of(&payer), 0);
    assert_eq!(token_balance(&e, &token, &payer), DEFAULT_MINT - 300);
    assert_eq!(token_balance(&e, &token, &beneficiary), 0);
}

#[test]
fn test_stake_without_allowance_fails_transfer() {
    let e = Env::default();
    let (client, _admin, _staker, token, contract_id) = setup(&e);

    let unapproved = Address::generate(&e);
    StellarAssetClient::new(&e, &token).mint(&unapproved, &1_000);

    assert_eq!(
        client.try_stake(&unapproved, &500),
        Err(Ok(StakingError::TransferFailed))
    );
    assert_eq!(client.balance_of(&unapproved), 0);
    assert_eq!(client.total_supply(), 0);
    assert_eq!(token_balance(&e, &token, &unapproved), 1_000);
    assert_eq!(token_balance(&e, &token, &contract_id), 0);
}

#[test]
fn test_stake_beyond_token_balance_fails_transfer() {
    let e = Env::default();
    let (client, _admin, _staker, token, contract_id) = setup(&e);
    let poor = Address::generate(&e);
    fund(&e, &token, &contract_id, &poor, 50);

    assert_eq!(
        client.try_stake(&poor, &51),
        Err(Ok(StakingError::TransferFailed))
    );
    assert_eq!(client.balance_of(&poor), 0);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Unstaking
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_unstake_reference_scenario() {
    let e = Env::default();
    let (client, _admin, staker, token, _cid) = setup(&e);

    client.stake(&staker, &100);
    advance(&e, 10);
    assert_eq!(client.available(&staker), 10);

    client.unstake(&staker, &2);
    assert_eq!(client.balance_of(&staker), 98);
    assert_eq!(client.available(&staker), 9);
    assert_eq!(client.get_stake(&staker).timestamp, START);
    assert_eq!(token_balance(&e, &token, &staker), DEFAULT_MINT - 98);
}

#[test]
fn test_unstake_more_than_available_fails_without_state_change() {
    let e = Env::default();
    let (client, _admin, staker, token, contract_id) = setup(&e);

    client.stake(&staker, &100);
    advance(&e, 10);

    assert_eq!(
        client.try_unstake(&staker, &11),
        Err(Ok(StakingError::AmountInvalid))
    );
    assert_eq!(client.balance_of(&staker), 100);
    assert_eq!(client.total_supply(), 100);
    assert_eq!(token_balance(&e, &token, &contract_id), 100);
}

#[test]
fn test_unstake_zero_fails() {
    let e = Env::default();
    let (client, _admin, staker, _token, _cid) = setup(&e);
    client.stake(&staker, &100);
    advance(&e, DURATION);
    assert_eq!(
        client.try_unstake(&staker, &0),
        Err(Ok(StakingError::AmountInvalid))
    );
}

#[test]
fn test_unstake_without_stake_fails() {
    let e = Env::default();
    let (client, _admin, staker, _token, _cid) = setup(&e);
    assert_eq!(
        client.try_unstake(&staker, &1),
        Err(Ok(StakingError::AmountInvalid))
    );
}

#[test]
fn test_unstake_to_frozen_account_fails_transfer() {
    let e = Env::default();
    let (client, _admin, staker, token, contract_id) = setup(&e);

    client.stake(&staker, &100);
    advance(&e, DURATION);
    StellarAssetClient::new(&e, &token).set_authorized(&staker, &false);

    assert_eq!(
        client.try_unstake(&staker, &100),
        Err(Ok(StakingError::TransferFailed))
    );
    assert_eq!(client.balance_of(&staker), 100);
    assert_eq!(client.total_supply(), 100);
    assert_eq!(token_balance(&e, &token, &contract_id), 100);
}

#[test]
fn test_available_grows_again_after_partial_unstake() {
    let e = Env::default();
    let (client, _admin, staker, _token, _cid) = setup(&e);

    client.stake(&staker, &1_000);
    advance(&e, 50);
    client.unstake(&staker, &500);
    assert_eq!(client.available(&staker), 0);

    advance(&e, 25);
    // 500 * 75 / 100
    assert_eq!(client.available(&staker), 375);
}

// ═══════════════════════════════════════════════════════════════════
// 4. Conservation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_total_supply_matches_balances_and_custody() {
    let e = Env::default();
    let (client, _admin, alice, token, contract_id) = setup(&e);
    let bob = funded_account(&e, &token, &contract_id);
    let carol = Address::generate(&e);

    let check = || {
        let sum = client.balance_of(&alice) + client.balance_of(&bob) + client.balance_of(&carol);
        assert_eq!(client.total_supply(), sum);
        assert_eq!(client.custody_balance(), sum);
    };

    client.stake(&alice, &1_000);
    check();
    advance(&e, 30);
    client.stake(&bob, &400);
    client.stake_for(&bob, &carol, &250);
    check();
    advance(&e, 40);
    client.unstake(&alice, &700);
    check();
    client.stake(&alice, &90);
    advance(&e, DURATION);
    client.unstake(&bob, &400);
    client.unstake(&carol, &250);
    check();
    let rest = client.balance_of(&alice);
    client.unstake(&alice, &rest);
    check();
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_get_stake_for_unknown_account_is_empty() {
    let e = Env::default();
    let (client, _admin, _staker, _token, _cid) = setup(&e);
    let nobody = Address::generate(&e);
    let stake = client.get_stake(&nobody);
    assert_eq!(stake.balance, 0);
    assert_eq!(stake.timestamp, 0);
    assert_eq!(stake.duration, DURATION);
    assert_eq!(client.available(&nobody), 0);
}

#[test]
fn test_half_duration_unlocks_half_balance() {
    let e = Env::default();
    let (client, _admin, staker, _token, _cid) = setup(&e);
    client.stake(&staker, &200);
    set_time(&e, START + DURATION / 2);
    assert_eq!(client.available(&staker), 100);
}
