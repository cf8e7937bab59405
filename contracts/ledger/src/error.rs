// Ledger error module for BelugaStake

use belugastake_position::PositionError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakingError {
    // Initialization errors (1-99)
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors (100-199)
    /// Caller is not the admin, or not the position owner
    Unauthorized = 100,

    // Tier errors (200-299)
    /// No tier registered for this lock period
    UnknownLockPeriod = 200,
    /// Lock period must be at least one day
    InvalidLockPeriod = 201,

    // Position errors (300-399)
    UnknownPosition = 300,
    PositionAlreadyClosed = 301,

    // Custody errors (400-499)
    /// Amount must be positive
    InvalidAmount = 400,
    /// Ledger holds less than the payout owed
    InsufficientLedgerBalance = 401,

    // Math errors (500-599)
    ArithmeticOverflow = 500,
}

impl From<PositionError> for StakingError {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::InvalidAmount => StakingError::InvalidAmount,
            PositionError::NotOwner => StakingError::Unauthorized,
            PositionError::AlreadyClosed => StakingError::PositionAlreadyClosed,
            PositionError::Overflow => StakingError::ArithmeticOverflow,
        }
    }
}

/// Human-readable error messages for frontends and debugging
pub struct StakingErrorMsg;

impl StakingErrorMsg {
    pub const ALREADY_INITIALIZED: &'static str = "Staking: already initialized";
    pub const NOT_INITIALIZED: &'static str = "Staking: not initialized";
    pub const UNAUTHORIZED: &'static str = "Staking: caller not authorized";
    pub const UNKNOWN_LOCK_PERIOD: &'static str = "Staking: no tier for this lock period";
    pub const INVALID_LOCK_PERIOD: &'static str = "Staking: lock period must be at least one day";
    pub const UNKNOWN_POSITION: &'static str = "Staking: position does not exist";
    pub const POSITION_ALREADY_CLOSED: &'static str = "Staking: position already closed";
    pub const INVALID_AMOUNT: &'static str = "Staking: amount must be positive";
    pub const INSUFFICIENT_LEDGER_BALANCE: &'static str = "Staking: ledger balance cannot cover payout";
    pub const ARITHMETIC_OVERFLOW: &'static str = "Staking: arithmetic overflow";
}

impl StakingError {
    pub fn message(&self) -> &'static str {
        match self {
            StakingError::AlreadyInitialized => StakingErrorMsg::ALREADY_INITIALIZED,
            StakingError::NotInitialized => StakingErrorMsg::NOT_INITIALIZED,
            StakingError::Unauthorized => StakingErrorMsg::UNAUTHORIZED,
            StakingError::UnknownLockPeriod => StakingErrorMsg::UNKNOWN_LOCK_PERIOD,
            StakingError::InvalidLockPeriod => StakingErrorMsg::INVALID_LOCK_PERIOD,
            StakingError::UnknownPosition => StakingErrorMsg::UNKNOWN_POSITION,
            StakingError::PositionAlreadyClosed => StakingErrorMsg::POSITION_ALREADY_CLOSED,
            StakingError::InvalidAmount => StakingErrorMsg::INVALID_AMOUNT,
            StakingError::InsufficientLedgerBalance => StakingErrorMsg::INSUFFICIENT_LEDGER_BALANCE,
            StakingError::ArithmeticOverflow => StakingErrorMsg::ARITHMETIC_OVERFLOW,
        }
    }
}
