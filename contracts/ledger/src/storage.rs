// Ledger storage module for BelugaStake
//
// Instance storage: config, tier table, id counter, stats.
// Persistent storage: positions and per-owner indexes.
//
// An owner index is split into pages of `OWNER_INDEX_PAGE_SIZE` ids so no
// single ledger entry grows with the number of stakes. A stake rewrites only
// the owner's last page and count.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::error::StakingError;
use crate::types::{LedgerStats, Position, StakingConfig};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger configuration
    Config,
    /// Initialization flag
    Initialized,
    /// Aggregate stats
    Stats,
    /// Next position id to issue
    NextPositionId,
    /// Lock periods in first-registered order
    LockPeriods,
    /// Rate in bps by lock period (days)
    Tier(u32),
    /// Position by id
    Position(u64),
    /// One page of position ids opened by an owner, in creation order
    OwnerPositions(Address, u32),
    /// Number of ids in an owner's index
    OwnerPositionCount(Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// Extend once remaining TTL drops below ~30 days
const PERSISTENT_BUMP_THRESHOLD: u32 = 518_400;

const INSTANCE_LIFETIME: u32 = 6_307_200;
const INSTANCE_BUMP_THRESHOLD: u32 = 518_400;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_LIFETIME);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_LIFETIME);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &StakingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<StakingConfig, StakingError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(StakingError::NotInitialized)
}

// ============================================================
// STATS
// ============================================================

pub fn write_stats(env: &Env, stats: &LedgerStats) {
    env.storage().instance().set(&DataKey::Stats, stats);
}

pub fn read_stats(env: &Env) -> LedgerStats {
    env.storage()
        .instance()
        .get(&DataKey::Stats)
        .unwrap_or_default()
}

// ============================================================
// POSITION ID COUNTER
// ============================================================

pub fn read_next_position_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextPositionId)
        .unwrap_or(0)
}

pub fn write_next_position_id(env: &Env, next: u64) {
    env.storage().instance().set(&DataKey::NextPositionId, &next);
}

// ============================================================
// TIERS
// ============================================================

pub fn read_lock_periods(env: &Env) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&DataKey::LockPeriods)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn write_lock_periods(env: &Env, periods: &Vec<u32>) {
    env.storage().instance().set(&DataKey::LockPeriods, periods);
}

pub fn read_tier_rate(env: &Env, lock_period_days: u32) -> Option<u32> {
    env.storage()
        .instance()
        .get(&DataKey::Tier(lock_period_days))
}

pub fn write_tier_rate(env: &Env, lock_period_days: u32, rate_bps: u32) {
    env.storage()
        .instance()
        .set(&DataKey::Tier(lock_period_days), &rate_bps);
}

// ============================================================
// POSITIONS
// ============================================================

pub fn read_position(env: &Env, position_id: u64) -> Option<Position> {
    let key = DataKey::Position(position_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_ttl(env, &key);
    }
    result
}

pub fn write_position(env: &Env, position: &Position) {
    let key = DataKey::Position(position.position_id);
    env.storage().persistent().set(&key, position);
    extend_ttl(env, &key);
}

// ============================================================
// OWNER INDEX
// ============================================================

/// Ids per owner index page
pub const OWNER_INDEX_PAGE_SIZE: u32 = 100;

fn read_owner_position_count(env: &Env, owner: &Address) -> u32 {
    let key = DataKey::OwnerPositionCount(owner.clone());
    match env.storage().persistent().get(&key) {
        Some(count) => {
            extend_ttl(env, &key);
            count
        }
        None => 0,
    }
}

fn read_owner_page(env: &Env, owner: &Address, page: u32) -> Vec<u64> {
    let key = DataKey::OwnerPositions(owner.clone(), page);
    match env.storage().persistent().get(&key) {
        Some(ids) => {
            extend_ttl(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

/// Every id in the owner's index, pages concatenated in order
pub fn read_owner_positions(env: &Env, owner: &Address) -> Vec<u64> {
    let count = read_owner_position_count(env, owner);
    let pages = count.div_ceil(OWNER_INDEX_PAGE_SIZE);

    let mut ids = Vec::new(env);
    for page in 0..pages {
        ids.append(&read_owner_page(env, owner, page));
    }
    ids
}

/// Append-only: ids are pushed in creation order and never removed
pub fn append_owner_position(
    env: &Env,
    owner: &Address,
    position_id: u64,
) -> Result<(), StakingError> {
    let count = read_owner_position_count(env, owner);
    let page = count / OWNER_INDEX_PAGE_SIZE;
    let next_count = count
        .checked_add(1)
        .ok_or(StakingError::ArithmeticOverflow)?;

    let mut ids = read_owner_page(env, owner, page);
    ids.push_back(position_id);

    let page_key = DataKey::OwnerPositions(owner.clone(), page);
    env.storage().persistent().set(&page_key, &ids);
    extend_ttl(env, &page_key);

    let count_key = DataKey::OwnerPositionCount(owner.clone());
    env.storage().persistent().set(&count_key, &next_count);
    extend_ttl(env, &count_key);

    Ok(())
}
