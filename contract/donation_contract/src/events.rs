use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub recipient: Address,
    pub description: String,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributedEvent {
    pub campaign_id: CampaignId,
    pub donor: Address,
    pub recipient: Address,
    pub amount: i128,
    pub total_contributed: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct AdminChangedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct MinContributionUpdatedEvent {
    pub old_amount: i128,
    pub new_amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"), event.campaign_id),
        event,
    );
}

pub fn emit_contributed(env: &Env, event: ContributedEvent) {
    env.events().publish(
        (Symbol::new(env, "contributed"), event.campaign_id),
        event,
    );
}

pub fn emit_admin_changed(env: &Env, event: AdminChangedEvent) {
    env.events().publish((Symbol::new(env, "admin_changed"),), event);
}

pub fn emit_min_contribution_updated(env: &Env, event: MinContributionUpdatedEvent) {
    env.events().publish(
        (Symbol::new(env, "min_contribution_updated"),),
        event,
    );
}

pub fn emit_paused(env: &Env, admin: Address) {
    env.events().publish((Symbol::new(env, "paused"),), admin);
}

pub fn emit_unpaused(env: &Env, admin: Address) {
    env.events().publish((Symbol::new(env, "unpaused"),), admin);
}
