//! Tier registry: lock period (days) -> interest rate (bps)
//!
//! Lock periods are enumerated in first-registered order. Re-registering an
//! existing period only replaces its rate.

use belugastake_math::DEFAULT_TIERS;
use soroban_sdk::{Env, Vec};

use crate::error::StakingError;
use crate::storage::{read_lock_periods, read_tier_rate, write_lock_periods, write_tier_rate};

/// Insert or update a tier. Returns true when the lock period is new.
pub fn upsert_tier(env: &Env, lock_period_days: u32, rate_bps: u32) -> Result<bool, StakingError> {
    if lock_period_days == 0 {
        return Err(StakingError::InvalidLockPeriod);
    }

    let is_new = read_tier_rate(env, lock_period_days).is_none();
    if is_new {
        let mut periods = read_lock_periods(env);
        periods.push_back(lock_period_days);
        write_lock_periods(env, &periods);
    }
    write_tier_rate(env, lock_period_days, rate_bps);

    Ok(is_new)
}

pub fn rate_for(env: &Env, lock_period_days: u32) -> Result<u32, StakingError> {
    read_tier_rate(env, lock_period_days).ok_or(StakingError::UnknownLockPeriod)
}

pub fn lock_periods(env: &Env) -> Vec<u32> {
    read_lock_periods(env)
}

pub fn seed_default_tiers(env: &Env) -> Result<(), StakingError> {
    for (lock_period_days, rate_bps) in DEFAULT_TIERS {
        upsert_tier(env, lock_period_days, rate_bps)?;
    }
    Ok(())
}
