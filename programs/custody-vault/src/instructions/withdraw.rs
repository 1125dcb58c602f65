use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, state::*};

use super::shared::transfer_tokens;

/// Pay a user out of custody, consuming the next withdraw sequence number
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Vault authority - executes withdrawals on behalf of users
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
        has_one = authority @ VaultError::Unauthorized,
    )]
    pub state: Account<'info, GlobalState>,

    /// CHECK: identity receiving the withdrawal, only its key is used
    pub user: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [USER_SEED, user.key().as_ref()],
        bump = user_account.bump,
        constraint = user_account.owner == user.key() @ VaultError::OwnerMismatch,
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        address = state.token_mint @ VaultError::InvalidMint,
    )]
    pub token_mint: Account<'info, Mint>,

    /// User's token account (destination)
    #[account(
        mut,
        constraint = user_token_account.mint == state.token_mint @ VaultError::InvalidMint,
        constraint = user_token_account.owner == user.key() @ VaultError::InvalidOwner,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Custody token account (source)
    #[account(
        mut,
        address = state.vault_token_account @ VaultError::InvalidVaultAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>, withdraw_id: u64, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // EFFECTS: sequence, amount and balance checks, then debit and counter advance
    let custody_balance = ctx.accounts.vault_token_account.amount;
    let state = &mut ctx.accounts.state;
    settle_withdrawal(
        state,
        &mut ctx.accounts.user_account,
        withdraw_id,
        amount,
        custody_balance,
        now,
    )?;

    msg!(
        "Withdraw {} consumed, next expected {}",
        withdraw_id,
        state.expected_withdraw_id
    );

    // INTERACTIONS: custody -> user, signed by the state PDA
    let state_bump = state.bump;
    let state_seeds: &[&[u8]] = &[STATE_SEED, &[state_bump]];

    transfer_tokens(
        &ctx.accounts.vault_token_account,
        &ctx.accounts.user_token_account,
        amount,
        &ctx.accounts.token_mint,
        &ctx.accounts.state.to_account_info(),
        &ctx.accounts.token_program,
        Some(state_seeds),
    )?;

    emit!(Withdrawn {
        withdraw_id,
        user: ctx.accounts.user.key(),
        amount,
        new_balance: ctx.accounts.user_account.balance,
        total_locked_tokens: ctx.accounts.state.total_locked_tokens,
        timestamp: now,
    });

    Ok(())
}

/// Consume `withdraw_id` against the record and check custody can pay out
pub fn settle_withdrawal(
    state: &mut GlobalState,
    user_account: &mut UserAccount,
    withdraw_id: u64,
    amount: u64,
    custody_balance: u64,
    now: i64,
) -> Result<()> {
    state.record_withdrawal(user_account, withdraw_id, amount, now)?;
    require!(custody_balance >= amount, VaultError::InsufficientVaultBalance);
    Ok(())
}
