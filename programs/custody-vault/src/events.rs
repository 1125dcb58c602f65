use anchor_lang::prelude::*;

/// Event emitted when the vault state and custody account are created
#[event]
pub struct VaultInitialized {
    pub state: Pubkey,
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub vault_token_account: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when a user is whitelisted
#[event]
pub struct UserAdded {
    pub user: Pubkey,
    pub total_users: u64,
    pub timestamp: i64,
}

/// Event emitted when a user loses whitelist status
#[event]
pub struct UserRemoved {
    pub user: Pubkey,
    pub remaining_balance: u64,
    pub total_users: u64,
    pub timestamp: i64,
}

/// Event emitted when tokens are deposited into custody
#[event]
pub struct DepositAdded {
    pub user: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
    pub total_locked_tokens: u64,
    pub timestamp: i64,
}

/// Event emitted when the authority pays a user out of custody
#[event]
pub struct Withdrawn {
    pub withdraw_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
    pub total_locked_tokens: u64,
    pub timestamp: i64,
}

/// Event emitted when custodial balance is settled between two records
#[event]
pub struct Validated {
    pub validate_id: u64,
    pub user_from: Pubkey,
    pub user_to: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
