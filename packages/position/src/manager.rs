// Position Lifecycle Logic
//
// Open -> Closed is the only transition. Everything here works on an
// in-memory `Position`; persisting it and moving funds is the caller's job.
// Callers must persist the closed position before releasing funds.

use belugastake_math::{
    calculate_interest, compute_unlock_date, days_remaining, is_unlocked, total_payout,
    InterestError,
};
use soroban_sdk::Address;

use crate::types::{Payout, PayoutQuote, Position};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PositionError {
    /// Deposit amount was zero or negative
    InvalidAmount,
    /// Caller does not own the position
    NotOwner,
    /// Position was already closed
    AlreadyClosed,
    /// Arithmetic overflow while pricing the position
    Overflow,
}

impl From<InterestError> for PositionError {
    fn from(err: InterestError) -> Self {
        match err {
            InterestError::NonPositivePrincipal => PositionError::InvalidAmount,
            InterestError::Overflow => PositionError::Overflow,
        }
    }
}

/// Build a new open position, freezing the tier rate and interest
pub fn open_position(
    position_id: u64,
    owner: Address,
    now: u64,
    lock_period_days: u32,
    rate_bps: u32,
    principal: i128,
) -> Result<Position, PositionError> {
    let interest_amount = calculate_interest(principal, rate_bps)?;
    let unlock_date = compute_unlock_date(now, lock_period_days)?;

    Ok(Position {
        position_id,
        owner,
        created_date: now,
        unlock_date,
        percent_interest: rate_bps,
        principal,
        interest_amount,
        is_open: true,
    })
}

/// Amounts owed if the position were closed at `now`
///
/// Interest is paid only at or after the unlock date; an early close returns
/// the principal and forfeits the interest.
pub fn payout_at(pos: &Position, now: u64) -> Result<Payout, PositionError> {
    let interest = if is_unlocked(pos.unlock_date, now) {
        pos.interest_amount
    } else {
        0
    };

    let total = total_payout(pos.principal, interest)?;

    Ok(Payout {
        principal: pos.principal,
        interest,
        total,
    })
}

/// Validate a close request without mutating anything
pub fn check_closable(pos: &Position, caller: &Address) -> Result<(), PositionError> {
    if pos.owner != *caller {
        return Err(PositionError::NotOwner);
    }
    if !pos.is_open {
        return Err(PositionError::AlreadyClosed);
    }
    Ok(())
}

/// Transition Open -> Closed and return the amounts to release
///
/// After this returns `Ok`, `pos.is_open` is false, so any later close of the
/// same record fails with `AlreadyClosed`.
pub fn close_position(
    pos: &mut Position,
    caller: &Address,
    now: u64,
) -> Result<Payout, PositionError> {
    check_closable(pos, caller)?;
    let payout = payout_at(pos, now)?;
    pos.is_open = false;
    Ok(payout)
}

/// Overwrite the unlock date. Interest is not recomputed.
pub fn set_unlock_date(pos: &mut Position, new_unlock_date: u64) -> Result<u64, PositionError> {
    if !pos.is_open {
        return Err(PositionError::AlreadyClosed);
    }
    let old = pos.unlock_date;
    pos.unlock_date = new_unlock_date;
    Ok(old)
}

/// Preview of a close at `now`, for display
pub fn quote(pos: &Position, now: u64) -> Result<PayoutQuote, PositionError> {
    let payout = if pos.is_open {
        payout_at(pos, now)?
    } else {
        Payout::default()
    };

    Ok(PayoutQuote {
        principal: payout.principal,
        interest: payout.interest,
        is_unlocked: is_unlocked(pos.unlock_date, now),
        days_remaining: days_remaining(pos.unlock_date, now),
    })
}
