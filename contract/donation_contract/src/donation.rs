use soroban_sdk::{log, panic_with_error, token, Address, Env};

use crate::storage_types::*;
use crate::utils::{
    checked_add, checked_increment, extend_instance, extend_persistent, read_token,
    read_total_raised,
};

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Campaign {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .unwrap_or_else(|| panic_with_error!(env, DonationError::CampaignNotFound))
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn read_contribution(env: &Env, campaign_id: CampaignId, donor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, donor.clone()))
        .unwrap_or(0)
}

/// Moves `amount` from `donor` to the campaign recipient and records it.
///
/// The token transfer and the bookkeeping run inside the same invocation, so
/// a failed transfer (missing auth, insufficient balance) aborts the whole
/// contribution and no totals change.
pub fn process_contribution(
    env: &Env,
    campaign: &mut Campaign,
    donor: &Address,
    amount: i128,
) {
    let token_client = token::Client::new(env, &read_token(env));
    token_client.transfer(donor, &campaign.recipient, &amount);

    let previous = read_contribution(env, campaign.id, donor);
    if previous == 0 {
        campaign.donor_count = checked_increment(env, campaign.donor_count);
    }
    campaign.total_contributed = checked_add(env, campaign.total_contributed, amount);
    save_campaign(env, campaign);

    let key = PersistentKey::Contribution(campaign.id, donor.clone());
    env.storage()
        .persistent()
        .set(&key, &checked_add(env, previous, amount));
    extend_persistent(env, &key);

    let total_raised = checked_add(env, read_total_raised(env), amount);
    env.storage().instance().set(&DataKey::TotalRaised, &total_raised);
    extend_instance(env);

    log!(env, "contribution recorded", campaign.id, amount);
}
