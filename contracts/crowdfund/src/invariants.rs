#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::types::{Campaign, CampaignStatus};
use crate::CrowdfundClient;

/// INV-1: Campaign total must never be negative.
pub fn assert_total_non_negative(campaign: &Campaign) {
    assert!(
        campaign.total_raised >= 0,
        "INV-1 violated: campaign {} has negative total_raised ({})",
        campaign.id,
        campaign.total_raised
    );
}

/// INV-2: Campaign goal must always be positive.
pub fn assert_goal_positive(campaign: &Campaign) {
    assert!(
        campaign.goal > 0,
        "INV-2 violated: campaign {} has non-positive goal ({})",
        campaign.id,
        campaign.goal
    );
}

/// INV-3: Campaign deadline must lie strictly after some creation instant,
/// i.e. it is never zero for a campaign created at timestamp >= 0.
pub fn assert_deadline_positive(campaign: &Campaign) {
    assert!(
        campaign.deadline > 0,
        "INV-3 violated: campaign {} has zero deadline",
        campaign.id
    );
}

/// INV-4: While a campaign is `Active` (and, incrementally, during refunds),
/// `total_raised` equals the sum of all outstanding pledge entries.
pub fn assert_total_matches_pledges(
    client: &CrowdfundClient,
    id: u64,
    contributors: &[Address],
) {
    let total = client.get_campaign(&id).total_raised;
    let sum: i128 = contributors
        .iter()
        .map(|contributor| client.get_pledge(&id, contributor))
        .sum();
    assert_eq!(
        total, sum,
        "INV-4 violated: campaign {} total_raised {} != pledge sum {}",
        id, total, sum
    );
}

/// INV-5: Pledge invariant — after a pledge of `amount`, the campaign total
/// should increase by exactly `amount`.
pub fn assert_pledge_invariant(total_before: i128, total_after: i128, amount: i128) {
    assert_eq!(
        total_after,
        total_before + amount,
        "INV-5 violated: pledge invariant broken: {} + {} != {}",
        total_before,
        amount,
        total_after
    );
}

/// INV-6: Campaign IDs are dense and sequential starting from 0.
pub fn assert_sequential_ids(client: &CrowdfundClient) {
    let count = client.campaign_count();
    for expected in 0..count {
        let campaign = client.get_campaign(&expected);
        assert_eq!(
            campaign.id, expected,
            "INV-6 violated: expected id {}, got {}",
            expected, campaign.id
        );
    }
}

/// INV-7: Status transition validity. The lifecycle is one-shot:
///   Active -> Successful | Failed
///   Successful -> (none)
///   Failed     -> (none)
pub fn assert_valid_status_transition(from: &CampaignStatus, to: &CampaignStatus) {
    let valid = matches!(
        (from, to),
        (CampaignStatus::Active, CampaignStatus::Successful)
            | (CampaignStatus::Active, CampaignStatus::Failed)
    );

    assert!(
        valid,
        "INV-7 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// INV-8: Campaign data immutability — fields that must not change after
/// creation (creator, title_hash, goal, deadline) remain unchanged.
pub fn assert_campaign_immutable_fields(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "INV-8 violated: campaign id changed");
    assert_eq!(
        original.creator, current.creator,
        "INV-8 violated: campaign creator changed"
    );
    assert_eq!(
        original.title_hash, current.title_hash,
        "INV-8 violated: campaign title_hash changed"
    );
    assert_eq!(
        original.goal, current.goal,
        "INV-8 violated: campaign goal changed"
    );
    assert_eq!(
        original.deadline, current.deadline,
        "INV-8 violated: campaign deadline changed"
    );
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_total_non_negative(campaign);
    assert_goal_positive(campaign);
    assert_deadline_positive(campaign);
}
