extern crate std;

use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address, Env};

use crate::{ContractError, StakingRewardsContract, StakingRewardsContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, StakingRewardsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &asset, &0);

    // Pre-fund the pool so funding calls can pass the solvency check.
    StellarAssetClient::new(&env, &asset).mint(&contract_id, &1_000_000i128);

    (env, client, owner)
}

// ── Two-step hand-over ───────────────────────────────────────────────────────

#[test]
fn test_owner_transfer_round_trip() {
    let (env, client, owner) = setup();
    let successor = Address::generate(&env);

    client.propose_owner(&owner, &successor);
    assert_eq!(client.get_pending_owner(), Some(successor.clone()));
    // Nothing changes until the successor accepts.
    assert_eq!(client.get_owner(), owner);

    client.accept_owner(&successor);
    assert_eq!(client.get_owner(), successor);
    assert_eq!(client.get_pending_owner(), None);
}

#[test]
fn test_new_owner_can_fund_and_old_owner_cannot() {
    let (env, client, owner) = setup();
    let successor = Address::generate(&env);

    client.propose_owner(&owner, &successor);
    client.accept_owner(&successor);

    client.fund_rewards(&successor, &1_000, &100);
    assert_eq!(client.get_reward_rate(), 10);

    match client.try_fund_rewards(&owner, &1_000, &100) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_propose_by_non_owner_fails() {
    let (env, client, _owner) = setup();
    let intruder = Address::generate(&env);

    match client.try_propose_owner(&intruder, &intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_pending_owner(), None);
}

#[test]
fn test_accept_by_wrong_address_fails() {
    let (env, client, owner) = setup();
    let successor = Address::generate(&env);
    let intruder = Address::generate(&env);

    client.propose_owner(&owner, &successor);

    match client.try_accept_owner(&intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_accept_without_proposal_fails() {
    let (env, client, _owner) = setup();
    let someone = Address::generate(&env);

    match client.try_accept_owner(&someone) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingOwner),
        _ => unreachable!("Expected NoPendingOwner error"),
    }
}

#[test]
fn test_cancel_owner_transfer() {
    let (env, client, owner) = setup();
    let successor = Address::generate(&env);

    client.propose_owner(&owner, &successor);
    client.cancel_owner_transfer(&owner);
    assert_eq!(client.get_pending_owner(), None);

    match client.try_accept_owner(&successor) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingOwner),
        _ => unreachable!("Expected NoPendingOwner error"),
    }
}

#[test]
fn test_cancel_without_proposal_fails() {
    let (_env, client, owner) = setup();

    match client.try_cancel_owner_transfer(&owner) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingOwner),
        _ => unreachable!("Expected NoPendingOwner error"),
    }
}
