//! Canonical event types emitted by the crowdfund contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/crowdfund/src/events.rs`. The `created` event is special: it is
//! the only place the full campaign title appears (on-chain storage keeps a
//! fingerprint), so the indexer lifts it into the campaign cache.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the crowdfund contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new campaign was created (`created` topic).
    CampaignCreated,
    /// A pledge was recorded and rewards issued (`pledged` topic).
    PledgeMade,
    /// A campaign reached its terminal state (`finalized` topic).
    CampaignFinalized,
    /// A successful campaign's funds went to the creator (`withdrawn` topic).
    FundsWithdrawn,
    /// A contributor reclaimed a pledge from a failed campaign (`refunded` topic).
    PledgeRefunded,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::CampaignCreated,
            "pledged" => Self::PledgeMade,
            "finalized" => Self::CampaignFinalized,
            "withdrawn" => Self::FundsWithdrawn,
            "refunded" => Self::PledgeRefunded,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignCreated => "campaign_created",
            Self::PledgeMade => "pledge_made",
            Self::CampaignFinalized => "campaign_finalized",
            Self::FundsWithdrawn => "funds_withdrawn",
            Self::PledgeRefunded => "pledge_refunded",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded crowdfund event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdfundEvent {
    pub event_type: String,
    pub campaign_id: Option<String>,
    /// Creator or contributor, depending on the event kind.
    pub actor: Option<String>,
    pub amount: Option<String>,
    /// Reward units issued alongside a pledge.
    pub reward: Option<String>,
    /// Full campaign title (only on `created`).
    pub title: Option<String>,
    /// Funding goal (only on `created`).
    pub goal: Option<String>,
    /// Campaign deadline timestamp (only on `created`).
    pub deadline: Option<i64>,
    /// Finalize outcome (only on `finalized`).
    pub successful: Option<bool>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub reward: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

/// A cached campaign row, assembled from `created` and `finalized` events.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CampaignRecord {
    pub campaign_id: String,
    pub creator: Option<String>,
    /// Human-readable title recovered from the `created` event.
    pub title: Option<String>,
    pub goal: Option<String>,
    pub deadline: Option<i64>,
    /// `NULL` while the campaign is still active.
    pub successful: Option<bool>,
    pub first_ledger: i64,
}
