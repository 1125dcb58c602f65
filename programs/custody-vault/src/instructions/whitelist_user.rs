use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

/// Whitelist a user, creating their record on first use
#[derive(Accounts)]
pub struct WhitelistUser<'info> {
    /// Vault authority - pays for the user record
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global state PDA
    /// Security: has_one constraint validates authority from state
    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
        has_one = authority @ VaultError::Unauthorized,
    )]
    pub state: Account<'info, GlobalState>,

    /// CHECK: identity being whitelisted, only its key is used
    pub user: UncheckedAccount<'info>,

    /// User record PDA
    #[account(
        init_if_needed,
        payer = authority,
        space = USER_ACCOUNT_SIZE,
        seeds = [USER_SEED, user.key().as_ref()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WhitelistUser>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let user = ctx.accounts.user.key();
    let bump = ctx.bumps.user_account;

    let state = &mut ctx.accounts.state;
    let added = state.add_user(&mut ctx.accounts.user_account, user, bump, now)?;

    if !added {
        msg!("User {} already whitelisted", user);
        return Ok(());
    }

    emit!(UserAdded {
        user,
        total_users: state.total_users,
        timestamp: now,
    });

    Ok(())
}
