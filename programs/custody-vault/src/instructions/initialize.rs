use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, events::*, state::*};

/// Create the global state and the custody token account
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer - becomes the vault authority
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global state PDA
    /// Created if missing; an existing, initialized record is rejected in the handler
    #[account(
        init_if_needed,
        payer = authority,
        space = GLOBAL_STATE_SIZE,
        seeds = [STATE_SEED],
        bump
    )]
    pub state: Account<'info, GlobalState>,

    /// The single token type this deployment custodies
    pub token_mint: Account<'info, Mint>,

    /// Custody token account, owned by the state PDA
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = token_mint,
        associated_token::authority = state,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();
    let token_mint = ctx.accounts.token_mint.key();
    let vault_token_account = ctx.accounts.vault_token_account.key();

    let state = &mut ctx.accounts.state;
    state.initialize(
        authority,
        token_mint,
        vault_token_account,
        ctx.bumps.state,
        now,
    )?;

    msg!("Vault initialized for mint {}", token_mint);

    emit!(VaultInitialized {
        state: state.key(),
        authority,
        token_mint,
        vault_token_account,
        timestamp: now,
    });

    Ok(())
}
