#![no_std]

pub mod types;
pub mod manager;

pub use types::{Payout, PayoutQuote, Position};
pub use manager::{
    check_closable, close_position, open_position, payout_at, quote, set_unlock_date,
    PositionError,
};
