// Custody Vault - whitelisted single-token custody on Solana
// Security: every check runs before any token movement; the transaction boundary is the only lock
// Architecture: global state PDA + one user record PDA per owner, two sequenced admin channels

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("45Lb9Jie8ruqABMF7iaJKA6CksWz1efyBff2T5923F5o");

#[program]
pub mod custody_vault {
    use super::*;

    /// Create the global state and custody token account for `token_mint`
    ///
    /// Security considerations:
    /// - Signer becomes the vault authority
    /// - Re-initialization is rejected with AlreadyInitialized
    /// - Custody account authority is the state PDA
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Whitelist a user, creating their record if needed
    ///
    /// Security considerations:
    /// - Authority-only function (has_one constraint)
    /// - Existing balance is preserved
    pub fn whitelist_user(ctx: Context<WhitelistUser>) -> Result<()> {
        instructions::whitelist_user::handler(ctx)
    }

    /// Remove a user from the whitelist
    ///
    /// Security considerations:
    /// - Authority-only function
    /// - Balance stays attributed to the user and can still be withdrawn
    pub fn remove_user(ctx: Context<RemoveUser>) -> Result<()> {
        instructions::remove_user::handler(ctx)
    }

    /// Deposit tokens into custody
    ///
    /// Security considerations:
    /// - User must sign and be whitelisted
    /// - Validates user token account (mint, owner) and custody address
    /// - Follows checks-effects-interactions pattern
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Pay `amount` out of custody to a user
    ///
    /// Security considerations:
    /// - Authority-only function
    /// - `withdraw_id` must equal the expected withdraw id exactly
    /// - Counter and balance only move together
    pub fn withdraw(ctx: Context<Withdraw>, withdraw_id: u64, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, withdraw_id, amount)
    }

    /// Settle custodial balance between two user records
    ///
    /// Security considerations:
    /// - Authority-only function
    /// - `validate_id` must equal the expected validate id exactly
    /// - Internal bookkeeping only, no token movement
    pub fn validate(ctx: Context<Validate>, validate_id: u64, amount: u64) -> Result<()> {
        instructions::validate::handler(ctx, validate_id, amount)
    }
}
