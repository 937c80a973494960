//! # Types
//!
//! Shared data structures used across all modules of the crowdfund contract.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at creation; never mutated.
//! - [`CampaignState`] — written on every pledge and on settlement.
//!
//! The public API exposes the reconstructed [`Campaign`] struct for convenience.
//!
//! ### Status as a Finite-State Machine
//!
//! [`CampaignStatus`] enforces a strict one-shot lifecycle:
//!
//! ```text
//! Active ──► Successful
//!     └────► Failed
//! ```
//!
//! The transition happens exactly once, in `finalize`, and only once the
//! campaign deadline has passed. `Successful` and `Failed` are terminal: no
//! entry point writes the status afterwards, settlement only moves balances.

use soroban_sdk::{contracttype, Address, BytesN};

/// Lifecycle status of a campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Accepting pledges until the deadline.
    Active,
    /// Finalized with `total_raised >= goal`; creator may withdraw.
    Successful,
    /// Finalized short of the goal; contributors may refund.
    Failed,
}

/// Immutable campaign configuration, written once at creation.
///
/// Stored separately from mutable state so that frequent writes (pledges,
/// settlement) only touch the small [`CampaignState`] entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub creator: Address,
    /// SHA-256 fingerprint of the display title. The title text itself is
    /// not retained on-chain; it travels in the `created` event so external
    /// indexers can recover it.
    pub title_hash: BytesN<32>,
    pub goal: i128,
    /// Ledger timestamp at which pledging stops and finalize becomes legal.
    pub deadline: u64,
}

/// Mutable campaign state, updated on pledges and settlement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    /// Sum of all outstanding pledge entries. Zeroed by a successful
    /// withdrawal; decremented entry-by-entry as refunds are paid out.
    pub total_raised: i128,
    pub status: CampaignStatus,
}

/// Full representation of a campaign.
///
/// Used as the public API return type; reconstructed internally from the
/// split `CampaignConfig` + `CampaignState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Unique identifier (auto-incremented, zero-based).
    pub id: u64,
    /// Address that created the campaign and receives funds on success.
    pub creator: Address,
    /// Content hash of the campaign title.
    pub title_hash: BytesN<32>,
    /// Target funding amount.
    pub goal: i128,
    /// Currently held amount.
    pub total_raised: i128,
    /// Ledger timestamp at which the campaign ends.
    pub deadline: u64,
    /// Current lifecycle status.
    pub status: CampaignStatus,
}
