//! # Crowdfund Contract
//!
//! This is the root crate of the campaign crowdfunding protocol. It exposes
//! the single Soroban contract [`Crowdfund`] whose entry points cover the
//! full campaign lifecycle:
//!
//! | Phase        | Entry Point(s)                                  |
//! |--------------|-------------------------------------------------|
//! | Bootstrap    | [`Crowdfund::init`]                             |
//! | Registration | [`Crowdfund::create`]                           |
//! | Funding      | [`Crowdfund::pledge`]                           |
//! | Lifecycle    | [`Crowdfund::finalize`]                         |
//! | Settlement   | [`Crowdfund::withdraw`], [`Crowdfund::refund`]  |
//! | Queries      | `campaign_count`, `get_campaign`, `get_pledge`  |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`], event payloads and
//! publishing to [`events`], and the external reward collaborator to
//! [`reward`]. This file contains **only** the public entry points and the
//! error taxonomy.
//!
//! Two external collaborators are consulted and never reimplemented:
//!
//! - the **funding token** (any token-interface contract) holds the pledged
//!   value; settlement moves it with `try_transfer` so a rejected transfer
//!   becomes a typed error instead of a stuck balance;
//! - the **reward issuer** mints incentive units proportional to each pledge
//!   through [`reward::RewardIssuer`].
//!
//! Every entry point is a single atomic unit of work: any `panic_with_error!`
//! aborts the invocation and the host discards all of its storage writes and
//! events. Settlement additionally commits its own ledger effects *before*
//! the outbound transfer, so a reentrant callback can never observe a stale
//! balance.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, xdr::ToXdr, Address, BytesN,
    Env, String,
};

mod events;
pub mod reward;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_settlement;

use events::{CampaignCreated, CampaignFinalized, FundsWithdrawn, PledgeMade, PledgeRefunded};
use reward::{RewardIssuerClient, REWARD_RATE};
use types::{CampaignConfig, CampaignState};

pub use types::{Campaign, CampaignStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized     = 2,
    // Validation
    TitleEmpty         = 3,
    GoalZero           = 4,
    DurationZero       = 5,
    CampaignNotFound   = 6,
    AmountZero         = 7,
    // Lifecycle
    CampaignEnded      = 8,
    CampaignNotEnded   = 9,
    AlreadyFinalized   = 10,
    NotFinalized       = 11,
    NotSuccessful      = 12,
    NotCreator         = 13,
    // Settlement
    NothingToWithdraw  = 14,
    WithdrawFailed     = 15,
    NothingToRefund    = 16,
    RefundFailed       = 17,
    RewardFailed       = 18,
}

#[contract]
pub struct Crowdfund;

#[contractimpl]
impl Crowdfund {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract with its two collaborators.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls fail with `Error::AlreadyInitialized`.
    ///
    /// - `funding_token` — token contract pledges and payouts are denominated in.
    /// - `reward_issuer` — contract issuing pledge rewards, see [`reward`].
    pub fn init(env: Env, funding_token: Address, reward_issuer: Address) {
        if storage::is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        storage::set_collaborators(&env, &funding_token, &reward_issuer);
    }

    // ─────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────

    /// Create a new campaign and return its sequential, zero-based ID.
    ///
    /// The deadline is fixed at `now + duration` and never changes. Only the
    /// SHA-256 fingerprint of `title` is stored; the full text is published
    /// in the `created` event for external indexing.
    pub fn create(env: Env, creator: Address, title: String, goal: i128, duration: u64) -> u64 {
        creator.require_auth();
        require_initialized(&env);

        if title.is_empty() {
            panic_with_error!(&env, Error::TitleEmpty);
        }
        if goal <= 0 {
            panic_with_error!(&env, Error::GoalZero);
        }
        if duration == 0 {
            panic_with_error!(&env, Error::DurationZero);
        }

        let id = storage::get_and_increment_campaign_id(&env);
        let deadline = env.ledger().timestamp() + duration;
        let title_hash: BytesN<32> = env
            .crypto()
            .sha256(&title.clone().to_xdr(&env))
            .to_bytes();

        let config = CampaignConfig {
            id,
            creator: creator.clone(),
            title_hash,
            goal,
            deadline,
        };
        let state = CampaignState {
            total_raised: 0,
            status: CampaignStatus::Active,
        };
        storage::save_campaign(&env, &config, &state);

        events::emit_created(
            &env,
            CampaignCreated {
                campaign_id: id,
                creator,
                title,
                goal,
                deadline,
            },
        );
        id
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Pledge `amount` of the funding token to campaign `id`.
    ///
    /// Pledges accumulate per contributor. Each pledge issues
    /// `amount * REWARD_RATE` reward units to the contributor through the
    /// reward issuer; if issuance fails the entire pledge is discarded.
    ///
    /// Returns the issued reward amount.
    pub fn pledge(env: Env, id: u64, contributor: Address, amount: i128) -> i128 {
        contributor.require_auth();

        let config = load_config(&env, id);
        // Time-based check only: finalize cannot run before the deadline and
        // pledges cannot land at or after it, so the two never race and the
        // status needs no inspection here.
        if env.ledger().timestamp() >= config.deadline {
            panic_with_error!(&env, Error::CampaignEnded);
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::AmountZero);
        }

        // Collect the pledge into the contract's custody.
        let token_client = token::Client::new(&env, &funding_token(&env));
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        // Commit every ledger effect before calling out to the issuer, so a
        // reentrant callback already sees the updated balances.
        let mut state = load_state(&env, id);
        state.total_raised += amount;
        storage::save_campaign_state(&env, id, &state);

        let pledged = storage::get_pledge(&env, id, &contributor);
        storage::set_pledge(&env, id, &contributor, pledged + amount);

        let reward = amount * REWARD_RATE;
        let issuer = RewardIssuerClient::new(&env, &reward_issuer(&env));
        match issuer.try_issue(&contributor, &reward) {
            Ok(Ok(())) => {}
            _ => panic_with_error!(&env, Error::RewardFailed),
        }

        events::emit_pledged(
            &env,
            PledgeMade {
                campaign_id: id,
                contributor,
                amount,
                reward,
            },
        );
        reward
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Finalize campaign `id` into its terminal state.
    ///
    /// Permissionless: anyone may call this once the deadline has passed.
    /// The outcome is a snapshot of `total_raised >= goal` at this moment and
    /// is the campaign's only status mutation — a second call fails with
    /// `Error::AlreadyFinalized`.
    ///
    /// Returns `true` if the campaign reached its goal.
    pub fn finalize(env: Env, id: u64) -> bool {
        let config = load_config(&env, id);
        let mut state = load_state(&env, id);

        if state.status != CampaignStatus::Active {
            panic_with_error!(&env, Error::AlreadyFinalized);
        }
        if env.ledger().timestamp() < config.deadline {
            panic_with_error!(&env, Error::CampaignNotEnded);
        }

        let successful = state.total_raised >= config.goal;
        state.status = if successful {
            CampaignStatus::Successful
        } else {
            CampaignStatus::Failed
        };
        storage::save_campaign_state(&env, id, &state);

        events::emit_finalized(
            &env,
            CampaignFinalized {
                campaign_id: id,
                successful,
            },
        );
        successful
    }

    // ─────────────────────────────────────────────────────────
    // Settlement
    // ─────────────────────────────────────────────────────────

    /// Withdraw the raised funds of a successful campaign to its creator.
    ///
    /// Pays out exactly once: the first call transfers the full
    /// `total_raised`; a repeat call fails with `Error::NothingToWithdraw`.
    ///
    /// Returns the amount paid.
    pub fn withdraw(env: Env, id: u64, caller: Address) -> i128 {
        caller.require_auth();

        let config = load_config(&env, id);
        let mut state = load_state(&env, id);

        match state.status {
            CampaignStatus::Active => panic_with_error!(&env, Error::NotFinalized),
            CampaignStatus::Failed => panic_with_error!(&env, Error::NotSuccessful),
            CampaignStatus::Successful => {}
        }
        if caller != config.creator {
            panic_with_error!(&env, Error::NotCreator);
        }

        let amount = state.total_raised;
        if amount == 0 {
            panic_with_error!(&env, Error::NothingToWithdraw);
        }

        // Effect before interaction: zero the balance first so a reentrant
        // call finds nothing left to withdraw. A rejected transfer aborts
        // the invocation and the host discards this write.
        state.total_raised = 0;
        storage::save_campaign_state(&env, id, &state);

        let token_client = token::Client::new(&env, &funding_token(&env));
        match token_client.try_transfer(&env.current_contract_address(), &caller, &amount) {
            Ok(Ok(())) => {}
            _ => panic_with_error!(&env, Error::WithdrawFailed),
        }

        events::emit_withdrawn(
            &env,
            FundsWithdrawn {
                campaign_id: id,
                creator: caller,
                amount,
            },
        );
        amount
    }

    /// Refund the caller's cumulative pledge from a failed campaign.
    ///
    /// Refunds are full and exactly-once per contributor: the entry is
    /// zeroed on payout and a repeat call fails with
    /// `Error::NothingToRefund`. A successful campaign refuses refunds with
    /// `Error::AlreadyFinalized`.
    ///
    /// Returns the amount paid.
    pub fn refund(env: Env, id: u64, caller: Address) -> i128 {
        caller.require_auth();

        load_config(&env, id);
        let mut state = load_state(&env, id);

        match state.status {
            CampaignStatus::Active => panic_with_error!(&env, Error::NotFinalized),
            CampaignStatus::Successful => panic_with_error!(&env, Error::AlreadyFinalized),
            CampaignStatus::Failed => {}
        }

        let amount = storage::get_pledge(&env, id, &caller);
        if amount == 0 {
            panic_with_error!(&env, Error::NothingToRefund);
        }

        // Effect before interaction: clear the entry and the running total
        // first, so a reentrant call cannot refund the same pledge twice.
        storage::set_pledge(&env, id, &caller, 0);
        state.total_raised -= amount;
        storage::save_campaign_state(&env, id, &state);

        let token_client = token::Client::new(&env, &funding_token(&env));
        match token_client.try_transfer(&env.current_contract_address(), &caller, &amount) {
            Ok(Ok(())) => {}
            _ => panic_with_error!(&env, Error::RefundFailed),
        }

        events::emit_refunded(
            &env,
            PledgeRefunded {
                campaign_id: id,
                contributor: caller,
                amount,
            },
        );
        amount
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Number of campaigns created so far. IDs are dense: `0..count`.
    pub fn campaign_count(env: Env) -> u64 {
        storage::get_campaign_count(&env)
    }

    /// Retrieve a campaign by its ID.
    pub fn get_campaign(env: Env, id: u64) -> Campaign {
        match storage::load_campaign(&env, id) {
            Some(campaign) => campaign,
            None => panic_with_error!(&env, Error::CampaignNotFound),
        }
    }

    /// Cumulative amount `contributor` has pledged to campaign `id`.
    /// Zero once refunded (or never pledged).
    pub fn get_pledge(env: Env, id: u64, contributor: Address) -> i128 {
        load_config(&env, id);
        storage::get_pledge(&env, id, &contributor)
    }
}

// ─────────────────────────────────────────────────────────────
// Entry-point helpers
// ─────────────────────────────────────────────────────────────

fn require_initialized(env: &Env) {
    if !storage::is_initialized(env) {
        panic_with_error!(env, Error::NotInitialized);
    }
}

fn funding_token(env: &Env) -> Address {
    match storage::get_funding_token(env) {
        Some(token) => token,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

fn reward_issuer(env: &Env) -> Address {
    match storage::get_reward_issuer(env) {
        Some(issuer) => issuer,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

fn load_config(env: &Env, id: u64) -> CampaignConfig {
    match storage::load_campaign_config(env, id) {
        Some(config) => config,
        None => panic_with_error!(env, Error::CampaignNotFound),
    }
}

fn load_state(env: &Env, id: u64) -> CampaignState {
    match storage::load_campaign_state(env, id) {
        Some(state) => state,
        None => panic_with_error!(env, Error::CampaignNotFound),
    }
}
