mod common;

use belugastake_ledger::StakingError;
use common::{DAY, ONE_UNIT, T0};
use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address, Env};

const NINETY_DAYS: u64 = 90 * DAY;

// ============================================================
// PAYOUT RULE
// ============================================================

#[test]
fn test_close_exactly_at_unlock_pays_interest() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let staker = common::funded_staker(&env, &s.token, ONE_UNIT);
    let id = s.client.stake(&staker, &90, &ONE_UNIT);

    common::advance_time(&env, NINETY_DAYS);
    assert_eq!(env_now(&env), T0 + 7_776_000);

    let (principal, interest) = s.client.close_position(&staker, &id);

    assert_eq!(principal, ONE_UNIT);
    assert_eq!(interest, ONE_UNIT / 10);
    assert_eq!(common::balance(&env, &s.token, &staker), 11_000_000);
    assert!(!s.client.get_position_by_id(&id).is_open);
}

#[test]
fn test_close_after_unlock_pays_interest() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let staker = common::funded_staker(&env, &s.token, 8 * ONE_UNIT);
    let id = s.client.stake(&staker, &180, &(8 * ONE_UNIT));

    common::advance_time(&env, 400 * DAY);
    let (principal, interest) = s.client.close_position(&staker, &id);

    assert_eq!(principal, 8 * ONE_UNIT);
    assert_eq!(interest, 8 * ONE_UNIT * 1200 / 10_000);
}

#[test]
fn test_close_before_unlock_pays_principal_only() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let staker = common::funded_staker(&env, &s.token, 5 * ONE_UNIT);
    let id = s.client.stake(&staker, &90, &(5 * ONE_UNIT));
    let reserve_before = s.client.get_ledger_balance();

    common::advance_time(&env, NINETY_DAYS - 1);
    let (principal, interest) = s.client.close_position(&staker, &id);

    assert_eq!(principal, 5 * ONE_UNIT);
    assert_eq!(interest, 0);
    assert_eq!(common::balance(&env, &s.token, &staker), 5 * ONE_UNIT);
    assert_eq!(s.client.get_ledger_balance(), reserve_before - 5 * ONE_UNIT);

    // Forfeited interest is not paid later either
    let stats = s.client.get_stats();
    assert_eq!(stats.interest_forfeited, 5 * ONE_UNIT / 10);
    assert_eq!(stats.interest_paid, 0);
}

// ============================================================
// DOUBLE CLOSE
// ============================================================

#[test]
fn test_double_close_rejected_and_balance_unchanged() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let staker = common::funded_staker(&env, &s.token, ONE_UNIT);
    let id = s.client.stake(&staker, &30, &ONE_UNIT);

    common::advance_time(&env, 30 * DAY);
    s.client.close_position(&staker, &id);

    let ledger_before = s.client.get_ledger_balance();
    let staker_before = common::balance(&env, &s.token, &staker);

    let result = s.client.try_close_position(&staker, &id);
    assert_eq!(result, Err(Ok(StakingError::PositionAlreadyClosed)));

    assert_eq!(s.client.get_ledger_balance(), ledger_before);
    assert_eq!(common::balance(&env, &s.token, &staker), staker_before);
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_double_close_panics_with_code() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let staker = common::funded_staker(&env, &s.token, ONE_UNIT);
    let id = s.client.stake(&staker, &30, &ONE_UNIT);

    s.client.close_position(&staker, &id);
    s.client.close_position(&staker, &id);
}

// ============================================================
// AUTHORIZATION / LOOKUP
// ============================================================

#[test]
fn test_non_owner_cannot_close() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let staker = common::funded_staker(&env, &s.token, ONE_UNIT);
    let thief = Address::generate(&env);
    let id = s.client.stake(&staker, &90, &ONE_UNIT);
    let ledger_before = s.client.get_ledger_balance();

    common::advance_time(&env, NINETY_DAYS);
    let result = s.client.try_close_position(&thief, &id);

    assert_eq!(result, Err(Ok(StakingError::Unauthorized)));
    assert!(s.client.get_position_by_id(&id).is_open);
    assert_eq!(s.client.get_ledger_balance(), ledger_before);
    assert_eq!(common::balance(&env, &s.token, &thief), 0);
}

#[test]
fn test_admin_cannot_close_someone_elses_position() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let staker = common::funded_staker(&env, &s.token, ONE_UNIT);
    let id = s.client.stake(&staker, &30, &ONE_UNIT);

    let result = s.client.try_close_position(&s.admin, &id);
    assert_eq!(result, Err(Ok(StakingError::Unauthorized)));
}

#[test]
fn test_close_unknown_position() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let staker = Address::generate(&env);

    let result = s.client.try_close_position(&staker, &7);
    assert_eq!(result, Err(Ok(StakingError::UnknownPosition)));
}

#[test]
#[should_panic]
fn test_close_requires_owner_signature() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let staker = common::funded_staker(&env, &s.token, ONE_UNIT);
    let id = s.client.stake(&staker, &30, &ONE_UNIT);

    env.mock_auths(&[]);
    s.client.close_position(&staker, &id);
}

// ============================================================
// RESERVE
// ============================================================

#[test]
fn test_insufficient_ledger_balance_is_reachable() {
    let env = Env::default();
    env.mock_all_auths();

    // No reserve: interest cannot be covered
    let s = common::setup_ledger_with_reserve(&env, 0);
    let staker = common::funded_staker(&env, &s.token, ONE_UNIT);
    let id = s.client.stake(&staker, &90, &ONE_UNIT);

    common::advance_time(&env, NINETY_DAYS);
    let result = s.client.try_close_position(&staker, &id);

    assert_eq!(result, Err(Ok(StakingError::InsufficientLedgerBalance)));
    assert!(s.client.get_position_by_id(&id).is_open);
    assert_eq!(s.client.get_ledger_balance(), ONE_UNIT);
    assert_eq!(s.client.get_stats().open_positions, 1);

    // Topping up the reserve unblocks the payout
    let funder = common::funded_staker(&env, &s.token, ONE_UNIT);
    s.client.fund_reserve(&funder, &ONE_UNIT);

    let (principal, interest) = s.client.close_position(&staker, &id);
    assert_eq!(principal + interest, 11_000_000);
    assert_eq!(s.client.get_ledger_balance(), ONE_UNIT - 1_000_000);
}

#[test]
fn test_early_close_without_reserve_succeeds() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger_with_reserve(&env, 0);
    let staker = common::funded_staker(&env, &s.token, ONE_UNIT);
    let id = s.client.stake(&staker, &90, &ONE_UNIT);

    let (principal, interest) = s.client.close_position(&staker, &id);
    assert_eq!((principal, interest), (ONE_UNIT, 0));
    assert_eq!(s.client.get_ledger_balance(), 0);
}

#[test]
fn test_held_balance_covers_open_principal() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let a = common::funded_staker(&env, &s.token, 20 * ONE_UNIT);
    let b = common::funded_staker(&env, &s.token, 20 * ONE_UNIT);

    let a0 = s.client.stake(&a, &30, &(3 * ONE_UNIT));
    let b0 = s.client.stake(&b, &180, &(7 * ONE_UNIT));
    let _a1 = s.client.stake(&a, &90, &(4 * ONE_UNIT));

    common::advance_time(&env, 31 * DAY);
    s.client.close_position(&a, &a0);
    s.client.close_position(&b, &b0);

    let stats = s.client.get_stats();
    assert_eq!(stats.open_positions, 1);
    assert_eq!(stats.principal_locked, 4 * ONE_UNIT);
    assert_eq!(stats.interest_paid, 3 * ONE_UNIT * 700 / 10_000);
    assert!(s.client.get_ledger_balance() >= stats.principal_locked);
}

#[test]
fn test_interest_never_paid_from_other_open_principal() {
    let env = Env::default();
    env.mock_all_auths();

    // No reserve: the ledger holds nothing but the two principals
    let s = common::setup_ledger_with_reserve(&env, 0);
    let a = common::funded_staker(&env, &s.token, 10 * ONE_UNIT);
    let b = common::funded_staker(&env, &s.token, 10 * ONE_UNIT);
    let a0 = s.client.stake(&a, &90, &(10 * ONE_UNIT));
    let b0 = s.client.stake(&b, &180, &(10 * ONE_UNIT));

    common::advance_time(&env, NINETY_DAYS);
    let result = s.client.try_close_position(&a, &a0);

    assert_eq!(result, Err(Ok(StakingError::InsufficientLedgerBalance)));
    assert!(s.client.get_position_by_id(&a0).is_open);
    assert_eq!(s.client.get_ledger_balance(), 20 * ONE_UNIT);
    assert_eq!(s.client.get_stats().principal_locked, 20 * ONE_UNIT);

    // Fund exactly A's interest
    let funder = common::funded_staker(&env, &s.token, ONE_UNIT);
    s.client.fund_reserve(&funder, &ONE_UNIT);

    let (principal, interest) = s.client.close_position(&a, &a0);
    assert_eq!((principal, interest), (10 * ONE_UNIT, ONE_UNIT));
    assert_eq!(s.client.get_ledger_balance(), 10 * ONE_UNIT);
    assert!(s.client.get_ledger_balance() >= s.client.get_stats().principal_locked);

    // B's principal is still there to take back
    let (principal, interest) = s.client.close_position(&b, &b0);
    assert_eq!((principal, interest), (10 * ONE_UNIT, 0));
    assert_eq!(common::balance(&env, &s.token, &b), 10 * ONE_UNIT);
    assert_eq!(s.client.get_ledger_balance(), 0);
}

#[test]
fn test_failed_payout_transfer_rolls_back_close() {
    let env = Env::default();
    env.mock_all_auths();

    let s = common::setup_ledger(&env);
    let staker = common::funded_staker(&env, &s.token, ONE_UNIT);
    let id = s.client.stake(&staker, &90, &ONE_UNIT);
    common::advance_time(&env, NINETY_DAYS);

    let stats_before = s.client.get_stats();
    let ledger_before = s.client.get_ledger_balance();

    // A deauthorized holder cannot receive the payout
    StellarAssetClient::new(&env, &s.token).set_authorized(&staker, &false);
    let result = s.client.try_close_position(&staker, &id);

    assert!(result.is_err());
    assert!(s.client.get_position_by_id(&id).is_open);
    assert_eq!(s.client.get_stats(), stats_before);
    assert_eq!(s.client.get_stats().open_positions, 1);
    assert_eq!(s.client.get_ledger_balance(), ledger_before);
    assert_eq!(common::balance(&env, &s.token, &staker), 0);

    // Once reauthorized the same position closes normally
    StellarAssetClient::new(&env, &s.token).set_authorized(&staker, &true);
    let (principal, interest) = s.client.close_position(&staker, &id);
    assert_eq!(principal + interest, 11_000_000);
}

fn env_now(env: &Env) -> u64 {
    env.ledger().timestamp()
}
