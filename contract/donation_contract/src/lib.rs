#![no_std]

mod donation;
mod events;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String, Vec};

pub use storage_types::{Campaign, CampaignId, DonationError, MAX_DESCRIPTION_LEN, MAX_PAGE_SIZE};
use storage_types::{DataKey, DEFAULT_MIN_CONTRIBUTION};
use utils::*;

#[contract]
pub struct DonationContract;

#[contractimpl]
impl DonationContract {
    /// Initialize the ledger with its administrator and the token it accepts
    pub fn initialize(env: Env, admin: Address, token: Address) {
        if is_initialized(&env) {
            panic_with_error!(&env, DonationError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage()
            .instance()
            .set(&DataKey::MinContribution, &DEFAULT_MIN_CONTRIBUTION);
        env.storage().instance().set(&DataKey::CampaignCount, &0u32);
        env.storage().instance().set(&DataKey::TotalRaised, &0i128);

        extend_instance(&env);
    }

    /// Create a campaign and return its sequential index
    pub fn create_campaign(
        env: Env,
        creator: Address,
        description: String,
        recipient: Address,
    ) -> CampaignId {
        creator.require_auth();
        check_writable(&env);
        validate_description(&env, &description);
        validate_recipient(&env, &recipient);

        let campaign_id = read_campaign_count(&env);
        let campaign = Campaign {
            id: campaign_id,
            description: description.clone(),
            recipient: recipient.clone(),
            creator: creator.clone(),
            total_contributed: 0,
            donor_count: 0,
            created_at: env.ledger().timestamp(),
        };

        donation::save_campaign(&env, &campaign);
        env.storage()
            .instance()
            .set(&DataKey::CampaignCount, &checked_increment(&env, campaign_id));
        extend_instance(&env);

        log!(&env, "campaign created", campaign_id);
        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                creator,
                recipient,
                description,
            },
        );

        campaign_id
    }

    /// Transfer `amount` tokens from `donor` to the campaign recipient and
    /// add it to the campaign total
    pub fn contribute(env: Env, donor: Address, campaign_id: CampaignId, amount: i128) {
        donor.require_auth();
        check_writable(&env);

        let mut campaign = donation::load_campaign(&env, campaign_id);
        validate_amount(&env, amount);

        donation::process_contribution(&env, &mut campaign, &donor, amount);

        events::emit_contributed(
            &env,
            events::ContributedEvent {
                campaign_id,
                donor,
                recipient: campaign.recipient,
                amount,
                total_contributed: campaign.total_contributed,
            },
        );
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = read_admin(&env);
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &new_admin);
        extend_instance(&env);

        events::emit_admin_changed(
            &env,
            events::AdminChangedEvent {
                old_admin: admin,
                new_admin,
            },
        );
    }

    pub fn set_min_contribution(env: Env, amount: i128) {
        let admin = read_admin(&env);
        admin.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, DonationError::InvalidAmount);
        }

        let old_amount = read_min_contribution(&env);
        env.storage().instance().set(&DataKey::MinContribution, &amount);
        extend_instance(&env);

        events::emit_min_contribution_updated(
            &env,
            events::MinContributionUpdatedEvent {
                old_amount,
                new_amount: amount,
            },
        );
    }

    pub fn pause(env: Env) {
        let admin = read_admin(&env);
        admin.require_auth();
        env.storage().instance().set(&DataKey::Paused, &true);
        extend_instance(&env);
        events::emit_paused(&env, admin);
    }

    pub fn unpause(env: Env) {
        let admin = read_admin(&env);
        admin.require_auth();
        env.storage().instance().set(&DataKey::Paused, &false);
        extend_instance(&env);
        events::emit_unpaused(&env, admin);
    }

    /// View functions
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Campaign {
        check_initialized(&env);
        donation::load_campaign(&env, campaign_id)
    }

    pub fn campaign_count(env: Env) -> u32 {
        read_campaign_count(&env)
    }

    /// Campaigns in index order starting at `start`, at most `MAX_PAGE_SIZE`
    pub fn get_campaigns(env: Env, start: CampaignId, limit: u32) -> Vec<Campaign> {
        let count = read_campaign_count(&env);
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE))
            .min(count);

        let mut campaigns = Vec::new(&env);
        for campaign_id in start..end {
            campaigns.push_back(donation::load_campaign(&env, campaign_id));
        }
        campaigns
    }

    pub fn get_contribution(env: Env, campaign_id: CampaignId, donor: Address) -> i128 {
        if campaign_id >= read_campaign_count(&env) {
            panic_with_error!(&env, DonationError::CampaignNotFound);
        }
        donation::read_contribution(&env, campaign_id, &donor)
    }

    pub fn total_raised(env: Env) -> i128 {
        read_total_raised(&env)
    }

    pub fn token(env: Env) -> Address {
        read_token(&env)
    }

    pub fn admin(env: Env) -> Address {
        read_admin(&env)
    }

    pub fn min_contribution(env: Env) -> i128 {
        read_min_contribution(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        utils::is_paused(&env)
    }
}
