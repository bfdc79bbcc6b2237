use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    Paused,
    MinContribution,
    CampaignCount,
    TotalRaised,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address),
}

pub type CampaignId = u32;

/// A donation target. `total_contributed` only ever grows.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub description: String,
    pub recipient: Address,
    pub creator: Address,
    pub total_contributed: i128,
    pub donor_count: u32,
    pub created_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DonationError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    EmptyDescription = 4,
    DescriptionTooLong = 5,
    InvalidRecipient = 6,
    InvalidAmount = 7,
    ContractPaused = 8,
    Overflow = 9,
}

// Constants
pub const MAX_DESCRIPTION_LEN: u32 = 256; // bytes
pub const MAX_PAGE_SIZE: u32 = 50;
pub const DEFAULT_MIN_CONTRIBUTION: i128 = 1;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
