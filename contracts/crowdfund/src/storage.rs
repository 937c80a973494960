//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the
//! crowdfund contract:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                         |
//! |-----------------|-----------|-------------------------------------|
//! | `CampaignCount` | `u64`     | Auto-increment campaign ID counter  |
//! | `FundingToken`  | `Address` | Token contract pledges are paid in  |
//! | `RewardIssuer`  | `Address` | Reward issuer contract              |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                   | Type             | Description                        |
//! |-----------------------|------------------|------------------------------------|
//! | `Config(id)`          | `CampaignConfig` | Immutable campaign configuration   |
//! | `State(id)`           | `CampaignState`  | Mutable campaign state             |
//! | `Pledge(id, address)` | `i128`           | Cumulative pledge per contributor  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! ## Why split Config and State?
//!
//! Pledges are high-frequency writes. Writing the full `Campaign` struct on
//! every pledge is wasteful; `CampaignState` is ~20 bytes, so separating it
//! keeps per-pledge ledger writes small while the public API still returns
//! the reconstructed [`Campaign`].
//!
//! Loads return `Option` so callers can surface a typed `CampaignNotFound`
//! error instead of an opaque panic.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Campaign, CampaignConfig, CampaignState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys (`CampaignCount`, `FundingToken`, `RewardIssuer`) live
/// as long as the contract and are extended together. Persistent-tier keys
/// (`Config`, `State`, `Pledge`) hold per-campaign data with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global auto-increment counter for campaign IDs (Instance).
    CampaignCount,
    /// Token contract in which pledges and payouts are denominated (Instance).
    FundingToken,
    /// External reward issuer contract (Instance).
    RewardIssuer,
    /// Immutable campaign configuration keyed by ID (Persistent).
    Config(u64),
    /// Mutable campaign state keyed by ID (Persistent).
    State(u64),
    /// Cumulative pledged amount keyed by campaign ID and contributor (Persistent).
    Pledge(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// `true` once `init` has stored the collaborator addresses.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::FundingToken)
}

/// Store the collaborator addresses. Called exactly once, from `init`.
pub fn set_collaborators(env: &Env, funding_token: &Address, reward_issuer: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::FundingToken, funding_token);
    env.storage()
        .instance()
        .set(&DataKey::RewardIssuer, reward_issuer);
    bump_instance(env);
}

/// Retrieve the funding token address. `None` before `init`.
pub fn get_funding_token(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::FundingToken)
}

/// Retrieve the reward issuer address. `None` before `init`.
pub fn get_reward_issuer(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::RewardIssuer)
}

/// Number of campaigns created so far.
pub fn get_campaign_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Atomically reads, increments, and stores the campaign counter.
/// Returns the ID to use for the *current* campaign (pre-increment value).
pub fn get_and_increment_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(current + 1));
    current
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and initial mutable state for a new campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig, state: &CampaignState) {
    let config_key = DataKey::Config(config.id);
    let state_key = DataKey::State(config.id);

    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Campaign` by combining config and state.
/// `None` if the campaign does not exist.
pub fn load_campaign(env: &Env, id: u64) -> Option<Campaign> {
    let config = load_campaign_config(env, id)?;
    let state = load_campaign_state(env, id)?;
    Some(Campaign {
        id: config.id,
        creator: config.creator,
        title_hash: config.title_hash,
        goal: config.goal,
        total_raised: state.total_raised,
        deadline: config.deadline,
        status: state.status,
    })
}

/// Load only the immutable campaign configuration.
pub fn load_campaign_config(env: &Env, id: u64) -> Option<CampaignConfig> {
    let key = DataKey::Config(id);
    let config: Option<CampaignConfig> = env.storage().persistent().get(&key);
    if config.is_some() {
        bump_persistent(env, &key);
    }
    config
}

/// Load only the mutable campaign state.
pub fn load_campaign_state(env: &Env, id: u64) -> Option<CampaignState> {
    let key = DataKey::State(id);
    let state: Option<CampaignState> = env.storage().persistent().get(&key);
    if state.is_some() {
        bump_persistent(env, &key);
    }
    state
}

/// Save only the mutable campaign state (optimized for pledges/settlement).
pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::State(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

// ── Pledge Entries ───────────────────────────────────────────────────

/// Cumulative amount pledged by `contributor` to campaign `id` (0 if none).
pub fn get_pledge(env: &Env, id: u64, contributor: &Address) -> i128 {
    let key = DataKey::Pledge(id, contributor.clone());
    let amount: Option<i128> = env.storage().persistent().get(&key);
    if amount.is_some() {
        bump_persistent(env, &key);
    }
    amount.unwrap_or(0)
}

/// Overwrite the pledge entry for `(id, contributor)`.
pub fn set_pledge(env: &Env, id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::Pledge(id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}
