extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::invariants;
use crate::test::{advance_time, setup, title};
use crate::{CampaignStatus, Error};

// ─────────────────────────────────────────────────────────
// Withdrawal (successful campaigns)
// ─────────────────────────────────────────────────────────

/// Scenario: goal 1_000 over 10s, fully pledged, time passes, finalize
/// succeeds and the creator withdraws the full amount.
#[test]
fn creator_withdraws_after_success() {
    let (env, client, token_client, token_sac, _) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);
    token_sac.mint(&backer, &1_000);

    let id = client.create(&creator, &title(&env, "Garden"), &1_000, &10);
    client.pledge(&id, &backer, &1_000);

    advance_time(&env, 11);
    assert!(client.finalize(&id));

    let paid = client.withdraw(&id, &creator);
    assert_eq!(paid, 1_000);
    assert_eq!(token_client.balance(&creator), 1_000);
    assert_eq!(token_client.balance(&client.address), 0);

    let campaign = client.get_campaign(&id);
    assert_eq!(campaign.total_raised, 0);
    assert_eq!(campaign.status, CampaignStatus::Successful);
}

#[test]
fn withdraw_pays_exactly_once() {
    let (env, client, _, token_sac, _) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);
    token_sac.mint(&backer, &2_000);

    let id = client.create(&creator, &title(&env, "Garden"), &1_500, &10);
    client.pledge(&id, &backer, &2_000);

    advance_time(&env, 10);
    client.finalize(&id);

    assert_eq!(client.withdraw(&id, &creator), 2_000);
    assert_eq!(
        client.try_withdraw(&id, &creator),
        Err(Ok(Error::NothingToWithdraw.into()))
    );
}

#[test]
fn withdraw_guards_state_and_caller() {
    let (env, client, _, token_sac, _) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);
    let stranger = Address::generate(&env);
    token_sac.mint(&backer, &5_000);

    let winning = client.create(&creator, &title(&env, "Reached"), &1_000, &10);
    let losing = client.create(&creator, &title(&env, "Missed"), &9_000, &10);
    client.pledge(&winning, &backer, &1_000);
    client.pledge(&losing, &backer, &100);

    // Still active: nothing to settle yet.
    assert_eq!(
        client.try_withdraw(&winning, &creator),
        Err(Ok(Error::NotFinalized.into()))
    );

    advance_time(&env, 10);
    assert!(client.finalize(&winning));
    assert!(!client.finalize(&losing));

    assert_eq!(
        client.try_withdraw(&winning, &stranger),
        Err(Ok(Error::NotCreator.into()))
    );
    assert_eq!(
        client.try_withdraw(&losing, &creator),
        Err(Ok(Error::NotSuccessful.into()))
    );
    assert_eq!(
        client.try_withdraw(&7, &creator),
        Err(Ok(Error::CampaignNotFound.into()))
    );
}

// ─────────────────────────────────────────────────────────
// Refunds (failed campaigns)
// ─────────────────────────────────────────────────────────

/// Scenario: goal 2_000 over 10s, only 1_000 pledged, campaign fails,
/// the contributor reclaims the full pledge.
#[test]
fn contributor_refunds_after_failure() {
    let (env, client, token_client, token_sac, _) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);
    token_sac.mint(&backer, &1_000);

    let id = client.create(&creator, &title(&env, "Garden"), &2_000, &10);
    client.pledge(&id, &backer, &1_000);

    advance_time(&env, 11);
    assert!(!client.finalize(&id));

    let paid = client.refund(&id, &backer);
    assert_eq!(paid, 1_000);
    assert_eq!(token_client.balance(&backer), 1_000);
    assert_eq!(client.get_pledge(&id, &backer), 0);
    assert_eq!(client.get_campaign(&id).total_raised, 0);
}

#[test]
fn refund_pays_exactly_once_per_contributor() {
    let (env, client, _, token_sac, _) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);
    token_sac.mint(&backer, &500);

    let id = client.create(&creator, &title(&env, "Garden"), &9_000, &10);
    client.pledge(&id, &backer, &500);

    advance_time(&env, 10);
    client.finalize(&id);

    assert_eq!(client.refund(&id, &backer), 500);
    assert_eq!(
        client.try_refund(&id, &backer),
        Err(Ok(Error::NothingToRefund.into()))
    );
}

/// Scenario: two contributors pledge 100 and 200 against a goal of 1_000;
/// the campaign fails; each refunds independently and the total only reaches
/// zero after both have been paid.
#[test]
fn refunds_are_independent_per_contributor() {
    let (env, client, token_client, token_sac, _) = setup();
    let creator = Address::generate(&env);
    let backer_a = Address::generate(&env);
    let backer_b = Address::generate(&env);
    token_sac.mint(&backer_a, &100);
    token_sac.mint(&backer_b, &200);

    let id = client.create(&creator, &title(&env, "Garden"), &1_000, &10);
    client.pledge(&id, &backer_a, &100);
    client.pledge(&id, &backer_b, &200);

    advance_time(&env, 10);
    client.finalize(&id);

    assert_eq!(client.refund(&id, &backer_a), 100);
    // The remaining entry still backs the running total.
    assert_eq!(client.get_campaign(&id).total_raised, 200);
    invariants::assert_total_matches_pledges(&client, id, &[backer_a.clone(), backer_b.clone()]);

    assert_eq!(client.refund(&id, &backer_b), 200);
    assert_eq!(client.get_campaign(&id).total_raised, 0);
    assert_eq!(token_client.balance(&backer_a), 100);
    assert_eq!(token_client.balance(&backer_b), 200);
}

#[test]
fn refund_guards_state() {
    let (env, client, _, token_sac, _) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);
    let bystander = Address::generate(&env);
    token_sac.mint(&backer, &3_000);

    let winning = client.create(&creator, &title(&env, "Reached"), &1_000, &10);
    let losing = client.create(&creator, &title(&env, "Missed"), &9_000, &10);
    client.pledge(&winning, &backer, &1_500);
    client.pledge(&losing, &backer, &300);

    assert_eq!(
        client.try_refund(&losing, &backer),
        Err(Ok(Error::NotFinalized.into()))
    );

    advance_time(&env, 10);
    assert!(client.finalize(&winning));
    assert!(!client.finalize(&losing));

    // Refunds are only for failed campaigns.
    assert_eq!(
        client.try_refund(&winning, &backer),
        Err(Ok(Error::AlreadyFinalized.into()))
    );
    // Nothing pledged, nothing to reclaim.
    assert_eq!(
        client.try_refund(&losing, &bystander),
        Err(Ok(Error::NothingToRefund.into()))
    );
    assert_eq!(
        client.try_refund(&3, &backer),
        Err(Ok(Error::CampaignNotFound.into()))
    );
}
