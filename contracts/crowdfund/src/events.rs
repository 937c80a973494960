//! # Events
//!
//! Typed payloads for every event the contract publishes, plus small publish
//! helpers so the entry points stay declarative.
//!
//! Topic layout is `(symbol, campaign_id)` for every event, so indexers can
//! filter by kind with the first topic and by campaign with the second.
//!
//! | Topic       | Payload              | Emitted by |
//! |-------------|----------------------|------------|
//! | `created`   | [`CampaignCreated`]  | `create`   |
//! | `pledged`   | [`PledgeMade`]       | `pledge`   |
//! | `finalized` | [`CampaignFinalized`]| `finalize` |
//! | `withdrawn` | [`FundsWithdrawn`]   | `withdraw` |
//! | `refunded`  | [`PledgeRefunded`]   | `refund`   |
//!
//! `CampaignCreated` is the one place the full title text leaves the
//! contract: storage keeps only the 32-byte fingerprint, and indexers recover
//! the human-readable title from this event.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// A new campaign was created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub creator: Address,
    /// Full display title; only its hash is retained in storage.
    pub title: String,
    pub goal: i128,
    pub deadline: u64,
}

/// A pledge was recorded and rewards were issued.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeMade {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
    pub reward: i128,
}

/// The campaign was finalized into a terminal state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFinalized {
    pub campaign_id: u64,
    pub successful: bool,
}

/// The creator withdrew the raised funds of a successful campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub campaign_id: u64,
    pub creator: Address,
    pub amount: i128,
}

/// A contributor reclaimed their pledge from a failed campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeRefunded {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_created(env: &Env, event: CampaignCreated) {
    env.events()
        .publish((symbol_short!("created"), event.campaign_id), event);
}

pub fn emit_pledged(env: &Env, event: PledgeMade) {
    env.events()
        .publish((symbol_short!("pledged"), event.campaign_id), event);
}

pub fn emit_finalized(env: &Env, event: CampaignFinalized) {
    env.events()
        .publish((symbol_short!("finalized"), event.campaign_id), event);
}

pub fn emit_withdrawn(env: &Env, event: FundsWithdrawn) {
    env.events()
        .publish((symbol_short!("withdrawn"), event.campaign_id), event);
}

pub fn emit_refunded(env: &Env, event: PledgeRefunded) {
    env.events()
        .publish((symbol_short!("refunded"), event.campaign_id), event);
}
