#![no_std]

//! # BelugaStake Ledger
//!
//! Time-locked staking with tiered fixed interest.
//!
//! ## Responsibilities:
//! 1. Tier registry (lock period in days -> rate in bps)
//! 2. Position intake (stake) and per-owner indexing
//! 3. Payout on close: principal + interest once unlocked, principal only before
//! 4. Admin overrides (tiers, unlock date) and reserve custody
//!
//! Interest is paid from a shared reserve, not escrowed per position, so a
//! close can fail with `InsufficientLedgerBalance` when the reserve runs dry.
//! A close never pays out of the principal still locked by other open
//! positions.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

use belugastake_position::manager;

mod error;
mod events;
mod storage;
mod tiers;
mod types;

pub use error::{StakingError, StakingErrorMsg};
pub use storage::OWNER_INDEX_PAGE_SIZE;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct BelugaStaking;

#[contractimpl]
impl BelugaStaking {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the ledger
    ///
    /// # Arguments
    /// * `admin` - Administrative identity (tier edits, unlock overrides)
    /// * `token` - The single token staked and paid out
    /// * `initial_reserve` - Interest reserve moved from `admin` into custody (may be 0)
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        initial_reserve: i128,
    ) -> Result<(), StakingError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(StakingError::AlreadyInitialized);
        }
        if initial_reserve < 0 {
            return Err(StakingError::InvalidAmount);
        }

        let config = StakingConfig {
            admin: admin.clone(),
            token: token.clone(),
        };
        write_config(&env, &config);
        write_next_position_id(&env, 0);
        write_stats(&env, &LedgerStats::default());
        tiers::seed_default_tiers(&env)?;
        set_initialized(&env);
        extend_instance_ttl(&env);

        if initial_reserve > 0 {
            token::Client::new(&env, &token).transfer(
                &admin,
                &env.current_contract_address(),
                &initial_reserve,
            );
        }

        emit_initialized(&env, &admin, &token, initial_reserve);

        Ok(())
    }

    // ========================================================
    // STAKING
    // ========================================================

    /// Open a position locked for `lock_period_days`
    ///
    /// Returns the new position id.
    pub fn stake(
        env: Env,
        caller: Address,
        lock_period_days: u32,
        amount: i128,
    ) -> Result<u64, StakingError> {
        caller.require_auth();

        let config = read_config(&env)?;

        if amount <= 0 {
            return Err(StakingError::InvalidAmount);
        }

        let rate_bps = tiers::rate_for(&env, lock_period_days)?;
        let now = env.ledger().timestamp();
        let position_id = read_next_position_id(&env);
        let next_id = position_id
            .checked_add(1)
            .ok_or(StakingError::ArithmeticOverflow)?;

        let position = manager::open_position(
            position_id,
            caller.clone(),
            now,
            lock_period_days,
            rate_bps,
            amount,
        )?;

        let mut stats = read_stats(&env);
        stats.record_open(&position)?;

        // Custody in before the position is recorded
        token::Client::new(&env, &config.token).transfer(
            &caller,
            &env.current_contract_address(),
            &amount,
        );

        write_position(&env, &position);
        append_owner_position(&env, &caller, position_id)?;
        write_next_position_id(&env, next_id);
        write_stats(&env, &stats);
        extend_instance_ttl(&env);

        emit_staked(
            &env,
            position_id,
            &caller,
            amount,
            lock_period_days,
            position.unlock_date,
        );

        Ok(position_id)
    }

    /// Close a position and pay it out
    ///
    /// Returns `(principal_paid, interest_paid)`. Interest is zero when closed
    /// before the unlock date.
    pub fn close_position(
        env: Env,
        caller: Address,
        position_id: u64,
    ) -> Result<(i128, i128), StakingError> {
        caller.require_auth();

        let config = read_config(&env)?;
        let mut position =
            read_position(&env, position_id).ok_or(StakingError::UnknownPosition)?;

        let now = env.ledger().timestamp();
        let payout = manager::close_position(&mut position, &caller, now)?;

        // Principal of every other open position stays in custody
        let mut stats = read_stats(&env);
        let others_locked = stats
            .principal_locked
            .checked_sub(position.principal)
            .ok_or(StakingError::ArithmeticOverflow)?;

        let token_client = token::Client::new(&env, &config.token);
        let ledger_addr = env.current_contract_address();
        let available = token_client
            .balance(&ledger_addr)
            .checked_sub(others_locked)
            .ok_or(StakingError::ArithmeticOverflow)?;
        if available < payout.total {
            return Err(StakingError::InsufficientLedgerBalance);
        }

        stats.record_close(&position, &payout)?;

        // Persist the closed state before any value leaves the ledger
        write_position(&env, &position);
        write_stats(&env, &stats);
        extend_instance_ttl(&env);

        token_client.transfer(&ledger_addr, &caller, &payout.total);

        emit_position_closed(&env, position_id, &caller, payout.principal, payout.interest);

        Ok((payout.principal, payout.interest))
    }

    /// Add to the interest reserve without opening a position
    pub fn fund_reserve(env: Env, funder: Address, amount: i128) -> Result<(), StakingError> {
        funder.require_auth();

        let config = read_config(&env)?;

        if amount <= 0 {
            return Err(StakingError::InvalidAmount);
        }

        token::Client::new(&env, &config.token).transfer(
            &funder,
            &env.current_contract_address(),
            &amount,
        );

        emit_funded(&env, &funder, amount);

        Ok(())
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Add a tier or replace the rate of an existing one
    pub fn set_tier(
        env: Env,
        admin: Address,
        lock_period_days: u32,
        rate_bps: u32,
    ) -> Result<(), StakingError> {
        admin.require_auth();

        let config = read_config(&env)?;
        Self::require_admin(&config, &admin)?;

        let is_new = tiers::upsert_tier(&env, lock_period_days, rate_bps)?;
        extend_instance_ttl(&env);

        emit_tier_set(&env, lock_period_days, rate_bps, is_new);

        Ok(())
    }

    /// Overwrite a position's unlock date
    ///
    /// Privileged correction tool. The date may be moved anywhere, including
    /// into the past; interest is not recomputed. Closed positions are frozen.
    pub fn change_unlock_date(
        env: Env,
        admin: Address,
        position_id: u64,
        new_unlock_date: u64,
    ) -> Result<(), StakingError> {
        admin.require_auth();

        let config = read_config(&env)?;
        Self::require_admin(&config, &admin)?;

        let mut position =
            read_position(&env, position_id).ok_or(StakingError::UnknownPosition)?;
        let old_unlock_date = manager::set_unlock_date(&mut position, new_unlock_date)?;
        write_position(&env, &position);

        log!(
            &env,
            "unlock date override: position {}, {} -> {}",
            position_id,
            old_unlock_date,
            new_unlock_date
        );
        emit_unlock_date_changed(&env, position_id, old_unlock_date, new_unlock_date);

        Ok(())
    }

    /// Transfer admin role to new address
    /// Both old and new admin must authorize
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), StakingError> {
        let mut config = read_config(&env)?;
        config.admin.require_auth();
        new_admin.require_auth();

        emit_admin_updated(&env, &config.admin, &new_admin);

        config.admin = new_admin;
        write_config(&env, &config);
        extend_instance_ttl(&env);
        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, StakingError> {
        Ok(read_config(&env)?.admin)
    }

    pub fn get_token(env: Env) -> Result<Address, StakingError> {
        Ok(read_config(&env)?.token)
    }

    /// Lock periods in first-registered order
    pub fn get_lock_periods(env: Env) -> Vec<u32> {
        tiers::lock_periods(&env)
    }

    /// Rate in bps for a lock period
    pub fn get_interest_rate(env: Env, lock_period_days: u32) -> Result<u32, StakingError> {
        tiers::rate_for(&env, lock_period_days)
    }

    pub fn get_position_by_id(env: Env, position_id: u64) -> Result<Position, StakingError> {
        read_position(&env, position_id).ok_or(StakingError::UnknownPosition)
    }

    /// Ids opened by `owner`, in creation order (empty if none)
    pub fn get_position_ids_for_address(env: Env, owner: Address) -> Vec<u64> {
        read_owner_positions(&env, &owner)
    }

    /// Id the next successful stake will receive
    pub fn get_current_position_id(env: Env) -> u64 {
        read_next_position_id(&env)
    }

    /// Token balance held in custody by the ledger
    pub fn get_ledger_balance(env: Env) -> Result<i128, StakingError> {
        let config = read_config(&env)?;
        Ok(token::Client::new(&env, &config.token).balance(&env.current_contract_address()))
    }

    pub fn get_stats(env: Env) -> LedgerStats {
        read_stats(&env)
    }

    /// What closing the position would pay at the current ledger time
    pub fn preview_close(env: Env, position_id: u64) -> Result<PayoutQuote, StakingError> {
        let position =
            read_position(&env, position_id).ok_or(StakingError::UnknownPosition)?;
        Ok(manager::quote(&position, env.ledger().timestamp())?)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn require_admin(config: &StakingConfig, caller: &Address) -> Result<(), StakingError> {
        if config.admin != *caller {
            return Err(StakingError::Unauthorized);
        }
        Ok(())
    }
}
