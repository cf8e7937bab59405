// Interest and lock-period arithmetic
//
// All functions are checked: overflow is reported to the caller, never
// wrapped or saturated.

use crate::constants::{BPS_DENOMINATOR, HALF_DAY, SECONDS_PER_DAY};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InterestError {
    /// Principal must be strictly positive
    NonPositivePrincipal,
    /// Intermediate value exceeded the integer range
    Overflow,
}

/// Simple (non-compounding) interest for a fixed-rate tier.
///
/// `principal * rate_bps / 10000`, rounded toward zero.
pub fn calculate_interest(principal: i128, rate_bps: u32) -> Result<i128, InterestError> {
    if principal <= 0 {
        return Err(InterestError::NonPositivePrincipal);
    }

    principal
        .checked_mul(rate_bps as i128)
        .map(|scaled| scaled / BPS_DENOMINATOR)
        .ok_or(InterestError::Overflow)
}

/// Lock length in seconds for a tier
#[inline]
pub fn lock_duration_seconds(lock_period_days: u32) -> u64 {
    // u32::MAX * 86400 < u64::MAX, cannot overflow
    (lock_period_days as u64) * SECONDS_PER_DAY
}

/// Timestamp at which a position opened at `created_date` unlocks
pub fn compute_unlock_date(created_date: u64, lock_period_days: u32) -> Result<u64, InterestError> {
    created_date
        .checked_add(lock_duration_seconds(lock_period_days))
        .ok_or(InterestError::Overflow)
}

/// Principal plus interest, the full payout of a matured position
pub fn total_payout(principal: i128, interest: i128) -> Result<i128, InterestError> {
    principal.checked_add(interest).ok_or(InterestError::Overflow)
}

/// Whole days until `unlock_date`, rounded to nearest; 0 once unlocked
pub fn days_remaining(unlock_date: u64, now: u64) -> u64 {
    if now >= unlock_date {
        return 0;
    }
    let seconds_left = unlock_date - now;
    seconds_left.saturating_add(HALF_DAY) / SECONDS_PER_DAY
}

/// Unlock check used by the payout rule: unlocked exactly at `unlock_date`
#[inline]
pub fn is_unlocked(unlock_date: u64, now: u64) -> bool {
    now >= unlock_date
}
