// ============================================================
// TIME CONSTANTS
// ============================================================

/// Seconds in one lock-period day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Half a day, used to round remaining time to the nearest day
pub const HALF_DAY: u64 = SECONDS_PER_DAY / 2;

// ============================================================
// RATE CONSTANTS
// ============================================================

/// Basis points denominator (10000 bp = 100%)
pub const BPS_DENOMINATOR: i128 = 10_000;

// ============================================================
// DEFAULT TIERS
// ============================================================

/// Tiers seeded when a ledger is initialized, as (lock_period_days, rate_bps).
/// Order matters: it becomes the initial lock-period enumeration order.
pub const DEFAULT_TIERS: [(u32, u32); 3] = [
    (30, 700),   // 7.00%
    (90, 1000),  // 10.00%
    (180, 1200), // 12.00%
];
