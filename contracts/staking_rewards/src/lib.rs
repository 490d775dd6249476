#![no_std]

pub mod accrual;
pub mod asset;
pub mod events;
pub mod math;
pub mod schedule;
pub mod state;

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

use asset::Asset;
pub use state::{Account, Pool};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InsufficientStake = 5,
    AssetTransferFailed = 6,
    RewardTooHigh = 7,
    ArithmeticOverflow = 8,
    NoPendingOwner = 9,
}

// ── Public-facing types (re-exported for test consumers) ─────────────────────

/// Snapshot of an account's position returned by `get_account`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerInfo {
    pub staked: i128,
    pub reward_per_token_paid: i128,
    /// Settled at the last checkpoint.
    pub accrued_reward: i128,
    /// Settled plus everything accrued since, as of now.
    pub pending_rewards: i128,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingRewardsContract;

#[contractimpl]
impl StakingRewardsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `owner`      – the only address allowed to fund rewards.
    /// * `asset`      – token that is both staked and paid out as reward.
    /// * `start_time` – ledger timestamp before which nothing accrues.
    pub fn initialize(
        env: Env,
        owner: Address,
        asset: Address,
        start_time: u64,
    ) -> Result<(), ContractError> {
        if state::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        let pool = Pool {
            start_time,
            last_update_time: start_time,
            ..Pool::default()
        };

        state::set_initialized(&env);
        state::set_owner(&env, &owner);
        state::set_asset(&env, &asset);
        state::save_pool(&env, &pool);

        events::publish_initialized(&env, owner, asset, start_time);

        Ok(())
    }

    // ── Reward scheduling ───────────────────────────────────────────────────

    /// Open a funding window of `duration` seconds starting now.
    ///
    /// Unemitted reward from a window still in progress is rolled into the
    /// new rate. The pool must already hold enough unallocated tokens to
    /// cover the whole window, so the owner transfers the reward in first.
    pub fn fund_rewards(
        env: Env,
        caller: Address,
        amount: i128,
        duration: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let now = env.ledger().timestamp();
        let mut pool = state::load_pool(&env);

        schedule::fund(&mut pool, amount, duration, now)?;

        let asset = Self::asset(&env)?;
        schedule::ensure_solvent(&pool, Asset::new(&env, &asset).pool_balance())?;

        state::save_pool(&env, &pool);

        events::publish_reward_funded(&env, amount, duration, pool.reward_rate, pool.period_finish);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` tokens.
    ///
    /// The pool must have been approved to spend `amount` on behalf of
    /// `staker`. Rewards are checkpointed first so the new stake earns
    /// nothing retroactively.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let mut pool = state::load_pool(&env);
        let mut account = state::load_account(&env, &staker);

        // 1. Flush global accumulator then settle this account.
        accrual::update_reward(&mut pool, &mut account, now);

        // 2. Funds must arrive before they are recorded.
        let asset = Self::asset(&env)?;
        Asset::new(&env, &asset).pull(&staker, amount)?;

        // 3. Record the new stake.
        account.staked = account
            .staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        state::save_account(&env, &staker, &account);
        state::save_pool(&env, &pool);

        events::publish_staked(&env, staker, amount, pool.total_staked);

        Ok(())
    }

    /// Take `amount` tokens of stake back out.
    pub fn withdraw(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut pool = state::load_pool(&env);
        let mut account = state::load_account(&env, &staker);

        accrual::update_reward(&mut pool, &mut account, now);
        Self::reduce_stake(&mut pool, &mut account, amount)?;

        state::save_account(&env, &staker, &account);
        state::save_pool(&env, &pool);

        // Outgoing transfer only after every internal effect is stored.
        let asset = Self::asset(&env)?;
        Asset::new(&env, &asset).push(&staker, amount)?;

        events::publish_withdrawn(&env, staker, amount, pool.total_staked);

        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything `staker` has accrued. Returns the amount paid;
    /// zero is not an error.
    pub fn get_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut pool = state::load_pool(&env);
        let mut account = state::load_account(&env, &staker);
        let never_staked = !state::has_account(&env, &staker);

        accrual::update_reward(&mut pool, &mut account, now);
        let payable = Self::take_reward(&mut pool, &mut account)?;

        // Claims by addresses that never staked leave no storage entry.
        if !never_staked {
            state::save_account(&env, &staker, &account);
        }
        state::save_pool(&env, &pool);

        if payable > 0 {
            let asset = Self::asset(&env)?;
            Asset::new(&env, &asset).push(&staker, payable)?;
            events::publish_reward_paid(&env, staker, payable, pool.total_claimed);
        }

        Ok(payable)
    }

    /// Withdraw the whole stake and claim every accrued reward.
    ///
    /// Fails with `InvalidAmount` when nothing is staked. Returns the
    /// reward paid.
    pub fn exit(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let mut pool = state::load_pool(&env);
        let mut account = state::load_account(&env, &staker);

        accrual::update_reward(&mut pool, &mut account, now);
        let withdrawn = account.staked;
        Self::reduce_stake(&mut pool, &mut account, withdrawn)?;
        let payable = Self::take_reward(&mut pool, &mut account)?;

        state::save_account(&env, &staker, &account);
        state::save_pool(&env, &pool);

        let asset_address = Self::asset(&env)?;
        let asset = Asset::new(&env, &asset_address);
        asset.push(&staker, withdrawn)?;
        events::publish_withdrawn(&env, staker.clone(), withdrawn, pool.total_staked);

        if payable > 0 {
            asset.push(&staker, payable)?;
            events::publish_reward_paid(&env, staker, payable, pool.total_claimed);
        }

        Ok(payable)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Current stake of `account`.
    pub fn balance_of(env: Env, account: Address) -> i128 {
        state::load_account(&env, &account).staked
    }

    /// Reward `account` could claim right now, without mutating state.
    pub fn earned(env: Env, account: Address) -> i128 {
        let pool = state::load_pool(&env);
        let rpt = accrual::reward_per_token(&pool, env.ledger().timestamp());
        accrual::earned(&state::load_account(&env, &account), rpt)
    }

    /// Combined position for an account, with pending rewards projected
    /// to the current ledger time.
    pub fn get_account(env: Env, account: Address) -> StakerInfo {
        let pool = state::load_pool(&env);
        let stored = state::load_account(&env, &account);
        let rpt = accrual::reward_per_token(&pool, env.ledger().timestamp());

        StakerInfo {
            staked: stored.staked,
            reward_per_token_paid: stored.reward_per_token_paid,
            accrued_reward: stored.accrued_reward,
            pending_rewards: accrual::earned(&stored, rpt),
        }
    }

    /// Projected accumulator value at the current ledger time.
    pub fn reward_per_token(env: Env) -> i128 {
        accrual::reward_per_token(&state::load_pool(&env), env.ledger().timestamp())
    }

    pub fn last_time_reward_applicable(env: Env) -> u64 {
        accrual::last_time_reward_applicable(&state::load_pool(&env), env.ledger().timestamp())
    }

    /// Reward emitted over one full window at the current rate.
    pub fn get_reward_for_duration(env: Env) -> Result<i128, ContractError> {
        schedule::reward_for_duration(&state::load_pool(&env))
    }

    /// Return the current reward rate (tokens per second).
    pub fn get_reward_rate(env: Env) -> i128 {
        state::load_pool(&env).reward_rate
    }

    /// Return the sum of all currently staked tokens.
    pub fn get_total_staked(env: Env) -> i128 {
        state::load_pool(&env).total_staked
    }

    /// Return the lifetime sum of rewards paid out.
    pub fn get_total_claimed(env: Env) -> i128 {
        state::load_pool(&env).total_claimed
    }

    pub fn get_last_update_time(env: Env) -> u64 {
        state::load_pool(&env).last_update_time
    }

    pub fn get_period_finish(env: Env) -> u64 {
        state::load_pool(&env).period_finish
    }

    pub fn get_start_time(env: Env) -> u64 {
        state::load_pool(&env).start_time
    }

    pub fn get_rewards_duration(env: Env) -> u64 {
        state::load_pool(&env).rewards_duration
    }

    /// Full snapshot of the global pool state as last stored.
    pub fn get_pool(env: Env) -> Pool {
        state::load_pool(&env)
    }

    pub fn get_asset(env: Env) -> Result<Address, ContractError> {
        Self::asset(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        state::is_initialized(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        state::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Owner transfer (two-step) ──────────────────────────────────────────

    /// Propose a new owner. Only the current owner can call this; the new
    /// owner must call `accept_owner` to complete the hand-over.
    pub fn propose_owner(
        env: Env,
        current_owner: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        state::set_pending_owner(&env, &new_owner);

        events::publish_owner_transfer_proposed(&env, current_owner, new_owner);

        Ok(())
    }

    /// Accept the pending hand-over. Only the proposed owner can call this.
    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();

        let pending = state::get_pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        if new_owner != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_owner = state::get_owner(&env).ok_or(ContractError::NotInitialized)?;

        state::set_owner(&env, &new_owner);
        state::clear_pending_owner(&env);

        events::publish_owner_transfer_accepted(&env, old_owner, new_owner);

        Ok(())
    }

    /// Cancel a pending hand-over. Only the current owner can call this.
    pub fn cancel_owner_transfer(env: Env, current_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        let pending = state::get_pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        state::clear_pending_owner(&env);

        events::publish_owner_transfer_cancelled(&env, current_owner, pending);

        Ok(())
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        state::get_pending_owner(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the pool is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !state::is_initialized(env) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let owner = state::get_owner(env).ok_or(ContractError::NotInitialized)?;
        if *caller != owner {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn asset(env: &Env) -> Result<Address, ContractError> {
        state::get_asset(env).ok_or(ContractError::NotInitialized)
    }

    /// Stake-reducing effect shared by `withdraw` and `exit`. The caller has
    /// already checkpointed `account`.
    fn reduce_stake(
        pool: &mut Pool,
        account: &mut Account,
        amount: i128,
    ) -> Result<(), ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        if amount > account.staked {
            return Err(ContractError::InsufficientStake);
        }

        account.staked -= amount;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Zero the account's accrued reward and count it as claimed.
    fn take_reward(pool: &mut Pool, account: &mut Account) -> Result<i128, ContractError> {
        let payable = account.accrued_reward;
        account.accrued_reward = 0;

        if payable > 0 {
            pool.total_claimed = pool
                .total_claimed
                .checked_add(payable)
                .ok_or(ContractError::ArithmeticOverflow)?;
        }
        Ok(payable)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_owner;
