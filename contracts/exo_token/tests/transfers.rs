#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use setup::TestEnv;

use exo_token::ExoError;

#[test]
fn test_transfer_moves_balance_not_supply() {
    let t = TestEnv::new();
    let alice = t.funded_user(1_000);
    let bob = t.new_user();

    t.client.transfer(&alice, &bob, &300);

    assert_eq!(t.client.balance(&alice), 700);
    assert_eq!(t.client.balance(&bob), 300);
    assert_eq!(t.client.total_supply(), 1_000);
}

#[test]
fn test_transfer_insufficient_balance() {
    let t = TestEnv::new();
    let alice = t.funded_user(100);
    let bob = t.new_user();

    let res = t.client.try_transfer(&alice, &bob, &101);
    assert_eq!(res.unwrap_err().unwrap(), ExoError::InsufficientBalance);
    assert_eq!(t.client.balance(&alice), 100);
    assert_eq!(t.client.balance(&bob), 0);
}

#[test]
fn test_transfer_negative_amount() {
    let t = TestEnv::new();
    let alice = t.funded_user(100);
    let bob = t.new_user();

    let res = t.client.try_transfer(&alice, &bob, &-100);
    assert_eq!(res.unwrap_err().unwrap(), ExoError::InvalidAmount);
}

#[test]
fn test_allowance_logic_full() {
    let t = TestEnv::new();
    let owner = t.funded_user(10_000);
    let spender = t.new_user();
    let dest = t.new_user();

    assert_eq!(t.client.allowance(&owner, &spender), 0);

    t.client.approve(&owner, &spender, &500);
    t.client.transfer_from(&spender, &owner, &dest, &200);

    assert_eq!(t.client.allowance(&owner, &spender), 300);
    assert_eq!(t.client.balance(&dest), 200);
    assert_eq!(t.client.balance(&owner), 9_800);

    let res = t.client.try_transfer_from(&spender, &owner, &dest, &400);
    assert_eq!(res.unwrap_err().unwrap(), ExoError::InsufficientAllowance);
    assert_eq!(t.client.allowance(&owner, &spender), 300);
}

#[test]
fn test_transfer_from_respects_balance() {
    let t = TestEnv::new();
    let owner = t.funded_user(50);
    let spender = t.new_user();
    let dest = t.new_user();

    t.client.approve(&owner, &spender, &1_000);

    let res = t.client.try_transfer_from(&spender, &owner, &dest, &51);
    assert_eq!(res.unwrap_err().unwrap(), ExoError::InsufficientBalance);
    assert_eq!(t.client.allowance(&owner, &spender), 1_000);
}

#[test]
fn test_approve_overwrites_and_clears() {
    let t = TestEnv::new();
    let owner = t.new_user();
    let spender = t.new_user();

    t.client.approve(&owner, &spender, &700);
    t.client.approve(&owner, &spender, &20);
    assert_eq!(t.client.allowance(&owner, &spender), 20);

    t.client.approve(&owner, &spender, &0);
    assert_eq!(t.client.allowance(&owner, &spender), 0);
}
