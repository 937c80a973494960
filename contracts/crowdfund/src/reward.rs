//! # Reward issuer interface
//!
//! Every pledge triggers a proportional reward issuance on an external
//! contract. The issuer is a collaborator, not part of this contract: it
//! enforces its own authorization and supply rules, and this crate only
//! depends on the [`RewardIssuer`] interface below.
//!
//! The generated [`RewardIssuerClient`] is always invoked through
//! `try_issue`, so an issuer failure surfaces as a `Result` the pledge path
//! can translate into `Error::RewardFailed` — aborting, and thereby rolling
//! back, the entire pledge.

use soroban_sdk::{contractclient, Address, Env};

/// Rewards issued per unit pledged.
///
/// A fixed global ratio: a pledge of `n` units of the funding token issues
/// `n * REWARD_RATE` reward units to the contributor.
pub const REWARD_RATE: i128 = 5;

/// Interface of the external reward issuer contract.
#[contractclient(name = "RewardIssuerClient")]
pub trait RewardIssuer {
    /// Issue `amount` reward units to `to`.
    fn issue(env: Env, to: Address, amount: i128);
}
