extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{
    CampaignCreated, CampaignFinalized, FundsWithdrawn, PledgeMade, PledgeRefunded,
};
use crate::reward::REWARD_RATE;
use crate::test::{advance_time, setup, title};

#[test]
fn created_event_carries_the_full_title() {
    let (env, client, _, _, _) = setup();
    let creator = Address::generate(&env);
    let text = title(&env, "Community garden");
    let deadline = env.ledger().timestamp() + 3_600;

    let id = client.create(&creator, &text, &5_000, &3_600);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // The event is the only place the full title text appears; storage keeps
    // the fingerprint.
    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: id,
            creator: creator.clone(),
            title: text,
            goal: 5_000,
            deadline,
        }
    );
}

#[test]
fn pledged_event_reports_amount_and_reward() {
    let (env, client, _, token_sac, _) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);
    token_sac.mint(&backer, &1_000);

    let id = client.create(&creator, &title(&env, "Garden"), &5_000, &3_600);
    client.pledge(&id, &backer, &400);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("pledged").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PledgeMade = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PledgeMade {
            campaign_id: id,
            contributor: backer.clone(),
            amount: 400,
            reward: 400 * REWARD_RATE,
        }
    );
}

#[test]
fn finalized_event_reports_the_outcome() {
    let (env, client, _, _, _) = setup();
    let creator = Address::generate(&env);

    let id = client.create(&creator, &title(&env, "Garden"), &5_000, &10);
    advance_time(&env, 10);
    client.finalize(&id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("finalized").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignFinalized = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignFinalized {
            campaign_id: id,
            successful: false,
        }
    );
}

#[test]
fn withdrawn_event_reports_the_payout() {
    let (env, client, _, token_sac, _) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);
    token_sac.mint(&backer, &1_000);

    let id = client.create(&creator, &title(&env, "Garden"), &1_000, &10);
    client.pledge(&id, &backer, &1_000);
    advance_time(&env, 10);
    client.finalize(&id);
    client.withdraw(&id, &creator);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("withdrawn").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            campaign_id: id,
            creator: creator.clone(),
            amount: 1_000,
        }
    );
}

#[test]
fn refunded_event_reports_the_payout() {
    let (env, client, _, token_sac, _) = setup();
    let creator = Address::generate(&env);
    let backer = Address::generate(&env);
    token_sac.mint(&backer, &600);

    let id = client.create(&creator, &title(&env, "Garden"), &5_000, &10);
    client.pledge(&id, &backer, &600);
    advance_time(&env, 10);
    client.finalize(&id);
    client.refund(&id, &backer);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("refunded").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PledgeRefunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PledgeRefunded {
            campaign_id: id,
            contributor: backer.clone(),
            amount: 600,
        }
    );
}
