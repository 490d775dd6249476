use crate::math;
use crate::state::{Account, Pool};

/// Fixed-point scaling factor for `reward_per_token_stored`.
///
/// Every per-token value is multiplied by this constant before storage so
/// that sub-unit shares survive integer division. All divisions floor.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

// ── Core accrual engine ─────────────────────────────────────────────────────
//
// Nothing here can fail. Products are formed in 256 bits and results
// saturate at `i128::MAX`, so settling rewards never stands between a
// staker and their principal.

/// The latest instant rewards can be counted up to: `now` clamped to the
/// funded window's end, and never earlier than `start_time`.
pub fn last_time_reward_applicable(pool: &Pool, now: u64) -> u64 {
    now.min(pool.period_finish).max(pool.start_time)
}

fn elapsed_since_update(pool: &Pool, now: u64) -> i128 {
    i128::from(last_time_reward_applicable(pool, now).saturating_sub(pool.last_update_time))
}

/// Projected accumulator value at `now`, without mutating anything.
///
/// ```text
/// rpt = stored + (applicable − last_update) × rate × SCALE / total_staked
/// ```
///
/// With nothing staked the stored value is returned unchanged: there is no
/// denominator, and the elapsed interval contributes nothing.
pub fn reward_per_token(pool: &Pool, now: u64) -> i128 {
    if pool.total_staked <= 0 {
        return pool.reward_per_token_stored;
    }

    let delta = math::mul3_div_floor(
        pool.reward_rate,
        elapsed_since_update(pool, now),
        SCALE,
        pool.total_staked,
    );
    pool.reward_per_token_stored.saturating_add(delta)
}

/// Everything `account` is owed once the accumulator reads `current_rpt`.
///
/// ```text
/// earned = accrued + staked × (current_rpt − paid) / SCALE
/// ```
pub fn earned(account: &Account, current_rpt: i128) -> i128 {
    let pending = math::mul_div_floor(
        account.staked,
        current_rpt.saturating_sub(account.reward_per_token_paid),
        SCALE,
    );
    account.accrued_reward.saturating_add(pending)
}

/// Fold elapsed-time accrual into the global accumulator.
///
/// Must run before anything that changes `total_staked`, `reward_rate` or
/// the funding window. Intervals with nothing staked advance
/// `last_update_time` but leave both the accumulator and
/// `total_distributed` untouched; the rate itself is kept.
pub fn checkpoint_global(pool: &mut Pool, now: u64) {
    let applicable = last_time_reward_applicable(pool, now);
    let rpt = reward_per_token(pool, now);

    if pool.total_staked > 0 {
        let distributed = pool.reward_rate.saturating_mul(elapsed_since_update(pool, now));
        pool.total_distributed = pool.total_distributed.saturating_add(distributed);
    }

    pool.reward_per_token_stored = rpt;
    pool.last_update_time = pool.last_update_time.max(applicable);
}

/// Settle the account against the just-updated accumulator, then rebase
/// its snapshot so the next settlement only covers the next interval.
pub fn checkpoint_account(pool: &Pool, account: &mut Account) {
    account.accrued_reward = earned(account, pool.reward_per_token_stored);
    account.reward_per_token_paid = pool.reward_per_token_stored;
}

/// Global checkpoint followed by the account checkpoint.
pub fn update_reward(pool: &mut Pool, account: &mut Account, now: u64) {
    checkpoint_global(pool, now);
    checkpoint_account(pool, account);
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.
