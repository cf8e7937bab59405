// BelugaStake Math Package

#![no_std]

pub mod constants;
pub mod interest;

// Re-export commonly used items from constants
pub use constants::*;

pub use interest::{
    calculate_interest,
    compute_unlock_date,
    days_remaining,
    is_unlocked,
    lock_duration_seconds,
    total_payout,
    InterestError,
};
