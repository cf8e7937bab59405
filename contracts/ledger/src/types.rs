//! Ledger type definitions

use soroban_sdk::{contracttype, Address};

use crate::error::StakingError;

pub use belugastake_position::{Payout, PayoutQuote, Position};

// ============================================================
// LEDGER CONFIG
// ============================================================

/// Ledger configuration, fixed at initialization except for admin hand-over
#[contracttype]
#[derive(Clone, Debug)]
pub struct StakingConfig {
    /// Authorized for tier edits and unlock-date overrides
    pub admin: Address,
    /// The single token staked and paid out
    pub token: Address,
}

// ============================================================
// LEDGER STATS
// ============================================================

/// Aggregate bookkeeping over all positions
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LedgerStats {
    pub total_positions: u64,
    pub open_positions: u64,
    /// Sum of principal over open positions
    pub principal_locked: i128,
    /// Sum of frozen interest over open positions
    pub interest_committed: i128,
    pub interest_paid: i128,
    /// Interest given up by early closes
    pub interest_forfeited: i128,
}

impl LedgerStats {
    pub fn record_open(&mut self, position: &Position) -> Result<(), StakingError> {
        self.total_positions = self
            .total_positions
            .checked_add(1)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.open_positions = self
            .open_positions
            .checked_add(1)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.principal_locked = self
            .principal_locked
            .checked_add(position.principal)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.interest_committed = self
            .interest_committed
            .checked_add(position.interest_amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_close(&mut self, position: &Position, payout: &Payout) -> Result<(), StakingError> {
        let forfeited = position.interest_amount - payout.interest;

        self.open_positions = self.open_positions.saturating_sub(1);
        self.principal_locked = self.principal_locked.saturating_sub(position.principal);
        self.interest_committed = self
            .interest_committed
            .saturating_sub(position.interest_amount);
        self.interest_paid = self
            .interest_paid
            .checked_add(payout.interest)
            .ok_or(StakingError::ArithmeticOverflow)?;
        self.interest_forfeited = self
            .interest_forfeited
            .checked_add(forfeited)
            .ok_or(StakingError::ArithmeticOverflow)?;
        Ok(())
    }
}
