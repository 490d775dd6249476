use crate::accrual;
use crate::state::Pool;
use crate::ContractError;

/// Reward still owed by the running window at `now`, or zero once it has
/// finished.
pub fn leftover(pool: &Pool, now: u64) -> Result<i128, ContractError> {
    if now >= pool.period_finish {
        return Ok(0);
    }
    i128::from(pool.period_finish - now)
        .checked_mul(pool.reward_rate)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Start a new funding window of `duration` seconds at `now`.
///
/// The accumulator is checkpointed at the old rate first. Any reward the
/// current window has not yet emitted is folded into the new rate:
///
/// ```text
/// rate = (amount + leftover) / duration
/// ```
pub fn fund(pool: &mut Pool, amount: i128, duration: u64, now: u64) -> Result<(), ContractError> {
    if duration == 0 || amount < 0 {
        return Err(ContractError::InvalidAmount);
    }

    accrual::checkpoint_global(pool, now);

    let budget = amount
        .checked_add(leftover(pool, now)?)
        .ok_or(ContractError::ArithmeticOverflow)?;

    pool.reward_rate = budget / i128::from(duration);
    pool.last_update_time = now.max(pool.start_time);
    pool.period_finish = now
        .checked_add(duration)
        .ok_or(ContractError::ArithmeticOverflow)?;
    pool.rewards_duration = duration;
    Ok(())
}

/// Reward the current rate emits over a full window.
pub fn reward_for_duration(pool: &Pool) -> Result<i128, ContractError> {
    pool.reward_rate
        .checked_mul(i128::from(pool.rewards_duration))
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Pool balance not already spoken for by stake or by rewards that have
/// been distributed but not yet claimed.
pub fn unallocated(pool: &Pool, pool_balance: i128) -> i128 {
    let owed = pool.total_distributed.saturating_sub(pool.total_claimed);
    pool_balance
        .saturating_sub(pool.total_staked)
        .saturating_sub(owed)
}

/// The whole window's emission must be backed by unallocated balance.
pub fn ensure_solvent(pool: &Pool, pool_balance: i128) -> Result<(), ContractError> {
    if reward_for_duration(pool)? > unallocated(pool, pool_balance) {
        return Err(ContractError::RewardTooHigh);
    }
    Ok(())
}
