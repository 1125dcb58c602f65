use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, state::*};

use super::shared::transfer_tokens;

/// Deposit vault tokens into custody
///
/// Security checklist:
/// 1. SIGNER VALIDATION: user must sign and own the user record
/// 2. ACCOUNT OWNERSHIP: state and user record validated by seeds
/// 3. WHITELIST: only whitelisted users may deposit
/// 4. TOKEN ACCOUNT VALIDATION: mint, owner and custody address checked
/// 5. MATH SAFETY: checked operations in GlobalState::record_deposit
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
    )]
    pub state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [USER_SEED, user.key().as_ref()],
        bump = user_account.bump,
        constraint = user_account.owner == user.key() @ VaultError::OwnerMismatch,
        constraint = user_account.is_whitelisted @ VaultError::NotWhitelisted,
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        address = state.token_mint @ VaultError::InvalidMint,
    )]
    pub token_mint: Account<'info, Mint>,

    /// User's token account (source)
    #[account(
        mut,
        constraint = user_token_account.mint == state.token_mint @ VaultError::InvalidMint,
        constraint = user_token_account.owner == user.key() @ VaultError::InvalidOwner,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Custody token account (destination)
    #[account(
        mut,
        address = state.vault_token_account @ VaultError::InvalidVaultAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // CHECKS + EFFECTS: amount, overflow and wallet balance, then the credit
    let wallet_balance = ctx.accounts.user_token_account.amount;
    let state = &mut ctx.accounts.state;
    settle_deposit(state, &mut ctx.accounts.user_account, wallet_balance, amount, now)?;

    // INTERACTIONS: user -> custody, signed by the user
    transfer_tokens(
        &ctx.accounts.user_token_account,
        &ctx.accounts.vault_token_account,
        amount,
        &ctx.accounts.token_mint,
        &ctx.accounts.user.to_account_info(),
        &ctx.accounts.token_program,
        None,
    )?;

    emit!(DepositAdded {
        user: ctx.accounts.user.key(),
        amount,
        new_balance: ctx.accounts.user_account.balance,
        total_locked_tokens: ctx.accounts.state.total_locked_tokens,
        timestamp: now,
    });

    Ok(())
}

/// Credit `amount` to the record if the user's wallet can cover the transfer
///
/// Runs inside the deposit transaction, so a failed wallet check discards
/// the credit along with everything else.
pub fn settle_deposit(
    state: &mut GlobalState,
    user_account: &mut UserAccount,
    wallet_balance: u64,
    amount: u64,
    now: i64,
) -> Result<()> {
    state.record_deposit(user_account, amount, now)?;
    require!(wallet_balance >= amount, VaultError::InsufficientBalance);
    Ok(())
}
