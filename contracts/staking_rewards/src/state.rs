use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage key constants ───────────────────────────────────────────────────

const POOL: Symbol = symbol_short!("POOL");
const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");
const ASSET: Symbol = symbol_short!("ASSET");
const INITIALIZED: Symbol = symbol_short!("INIT");

// Per-account persistent storage uses tuple keys: (prefix, account)
const ACCOUNT: Symbol = symbol_short!("ACCT");

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const ACCOUNT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const ACCOUNT_LIFETIME_THRESHOLD: u32 = ACCOUNT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ── Types ───────────────────────────────────────────────────────────────────

/// Global pool state. Loaded once per invocation, mutated in memory and
/// written back only after every fallible step has succeeded.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pool {
    /// Sum of every account's `staked`.
    pub total_staked: i128,
    /// Reward units emitted per second across the whole pool.
    pub reward_rate: i128,
    /// Cumulative reward per staked unit, scaled by `SCALE`.
    pub reward_per_token_stored: i128,
    pub last_update_time: u64,
    /// End of the funded window; no accrual past this point.
    pub period_finish: u64,
    /// Accrual never begins before this timestamp. Fixed at initialization.
    pub start_time: u64,
    /// Length of the most recent funding window.
    pub rewards_duration: u64,
    /// Lifetime rewards paid out.
    pub total_claimed: i128,
    /// Lifetime rewards folded into the accumulator while stake was present.
    pub total_distributed: i128,
}

/// Per-account bookkeeping. Created lazily, never removed.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Account {
    pub staked: i128,
    /// Snapshot of `reward_per_token_stored` at the last checkpoint.
    pub reward_per_token_paid: i128,
    /// Earned but unclaimed, frozen at the last checkpoint.
    pub accrued_reward: i128,
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn account_key(account: &Address) -> (Symbol, Address) {
    (ACCOUNT, account.clone())
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&INITIALIZED, &true);
}

pub fn load_pool(env: &Env) -> Pool {
    env.storage().instance().get(&POOL).unwrap_or_default()
}

pub fn save_pool(env: &Env, pool: &Pool) {
    env.storage().instance().set(&POOL, pool);
    extend_instance(env);
}

/// Accounts that never staked read back as all-zero.
pub fn load_account(env: &Env, account: &Address) -> Account {
    env.storage()
        .persistent()
        .get(&account_key(account))
        .unwrap_or_default()
}

pub fn has_account(env: &Env, account: &Address) -> bool {
    env.storage().persistent().has(&account_key(account))
}

pub fn save_account(env: &Env, account: &Address, state: &Account) {
    let key = account_key(account);
    env.storage().persistent().set(&key, state);
    env.storage().persistent().extend_ttl(
        &key,
        ACCOUNT_LIFETIME_THRESHOLD,
        ACCOUNT_BUMP_AMOUNT,
    );
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
    extend_instance(env);
}

pub fn get_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

pub fn set_pending_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&PENDING_OWNER, owner);
}

pub fn clear_pending_owner(env: &Env) {
    env.storage().instance().remove(&PENDING_OWNER);
}

pub fn get_asset(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ASSET)
}

pub fn set_asset(env: &Env, asset: &Address) {
    env.storage().instance().set(&ASSET, asset);
}
