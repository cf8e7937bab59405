use soroban_sdk::{contracttype, Address};

/// A single time-locked deposit
///
/// `percent_interest` and `interest_amount` are captured when the position is
/// opened and never recomputed; tier edits only affect later positions.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub position_id: u64,
    pub owner: Address,
    pub created_date: u64,
    pub unlock_date: u64,
    /// Rate in basis points at creation time
    pub percent_interest: u32,
    pub principal: i128,
    pub interest_amount: i128,
    pub is_open: bool,
}

/// Amounts released by closing a position
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Payout {
    pub principal: i128,
    /// Zero when closed before the unlock date
    pub interest: i128,
    /// `principal + interest`, overflow-checked when the payout is priced
    pub total: i128,
}

/// Read-only projection of what closing a position would pay right now
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutQuote {
    pub principal: i128,
    pub interest: i128,
    pub is_unlocked: bool,
    pub days_remaining: u64,
}
