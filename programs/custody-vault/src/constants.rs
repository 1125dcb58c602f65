// Constants for the Custody Vault program

/// Seed for the global state PDA (also the custody token account authority)
pub const STATE_SEED: &[u8] = b"vault_state";

/// Seed prefix for per-user record PDAs, followed by the user's pubkey
pub const USER_SEED: &[u8] = b"user";

/// Padding reserved at the end of GlobalState for future upgrades
pub const STATE_RESERVED: usize = 64;

/// Padding reserved at the end of UserAccount for future upgrades
pub const USER_RESERVED: usize = 32;

/// Space for GlobalState account (8 discriminator + 32 authority + 32 token_mint +
/// 32 vault_token_account + 8 expected_withdraw_id + 8 expected_validate_id +
/// 8 total_users + 8 total_locked_tokens + 8 last_update + 1 bump + 64 padding)
pub const GLOBAL_STATE_SIZE: usize = 8 + 32 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 1 + STATE_RESERVED;

/// Space for UserAccount (8 discriminator + 32 owner + 1 is_whitelisted +
/// 8 balance + 8 last_deposit + 8 last_withdrawal + 8 total_deposits +
/// 8 total_withdrawals + 1 bump + 32 padding)
pub const USER_ACCOUNT_SIZE: usize = 8 + 32 + 1 + 8 + 8 + 8 + 8 + 8 + 1 + USER_RESERVED;
