//! Ledger events
//!
//! One topic symbol per event; payload is a flat tuple.

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the ledger is initialized
/// Data: (admin, token, initial_reserve)
pub fn emit_initialized(env: &Env, admin: &Address, token: &Address, initial_reserve: i128) {
    env.events().publish(
        (Symbol::new(env, "LedgerInit"),),
        (admin.clone(), token.clone(), initial_reserve),
    );
}

/// Emitted when a tier is added or its rate replaced
pub fn emit_tier_set(env: &Env, lock_period_days: u32, rate_bps: u32, is_new: bool) {
    env.events().publish(
        (Symbol::new(env, "TierSet"),),
        (lock_period_days, rate_bps, is_new),
    );
}

/// Emitted when a position is opened
/// Data: (position_id, owner, principal, lock_period_days, unlock_date)
pub fn emit_staked(
    env: &Env,
    position_id: u64,
    owner: &Address,
    principal: i128,
    lock_period_days: u32,
    unlock_date: u64,
) {
    env.events().publish(
        (Symbol::new(env, "Staked"),),
        (position_id, owner.clone(), principal, lock_period_days, unlock_date),
    );
}

/// Emitted when a position is closed and paid out
pub fn emit_position_closed(
    env: &Env,
    position_id: u64,
    owner: &Address,
    principal_paid: i128,
    interest_paid: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Closed"),),
        (position_id, owner.clone(), principal_paid, interest_paid),
    );
}

/// Emitted on every admin unlock-date override (audit trail)
pub fn emit_unlock_date_changed(env: &Env, position_id: u64, old_unlock: u64, new_unlock: u64) {
    env.events().publish(
        (Symbol::new(env, "UnlockChanged"),),
        (position_id, old_unlock, new_unlock),
    );
}

/// Emitted when the interest reserve is topped up
pub fn emit_funded(env: &Env, funder: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "Funded"),),
        (funder.clone(), amount),
    );
}

/// Emitted when admin is updated
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminUpdated"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
