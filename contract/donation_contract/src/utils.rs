use soroban_sdk::{panic_with_error, Address, Env, String};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn read_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, DonationError::NotInitialized))
}

pub fn read_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, DonationError::NotInitialized))
}

pub fn read_min_contribution(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::MinContribution)
        .unwrap_or_else(|| panic_with_error!(env, DonationError::NotInitialized))
}

pub fn read_campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or_else(|| panic_with_error!(env, DonationError::NotInitialized))
}

pub fn read_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or_else(|| panic_with_error!(env, DonationError::NotInitialized))
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or_else(|| panic_with_error!(env, DonationError::NotInitialized))
}

pub fn check_initialized(env: &Env) {
    if !is_initialized(env) {
        panic_with_error!(env, DonationError::NotInitialized);
    }
}

/// Fails unless the ledger is initialized and accepting writes.
pub fn check_writable(env: &Env) {
    check_initialized(env);
    if is_paused(env) {
        panic_with_error!(env, DonationError::ContractPaused);
    }
}

pub fn validate_description(env: &Env, description: &String) {
    if description.len() == 0 {
        panic_with_error!(env, DonationError::EmptyDescription);
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        panic_with_error!(env, DonationError::DescriptionTooLong);
    }
}

pub fn validate_recipient(env: &Env, recipient: &Address) {
    if *recipient == env.current_contract_address() {
        panic_with_error!(env, DonationError::InvalidRecipient);
    }
}

pub fn validate_amount(env: &Env, amount: i128) {
    if amount <= 0 || amount < read_min_contribution(env) {
        panic_with_error!(env, DonationError::InvalidAmount);
    }
}

pub fn checked_add(env: &Env, a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic_with_error!(env, DonationError::Overflow))
}

pub fn checked_increment(env: &Env, value: u32) -> u32 {
    value
        .checked_add(1)
        .unwrap_or_else(|| panic_with_error!(env, DonationError::Overflow))
}
