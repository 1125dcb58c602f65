use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

use super::shared::{load_user_account, store_user_account};

/// Revoke a user's deposit rights without touching their balance
#[derive(Accounts)]
pub struct RemoveUser<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
        has_one = authority @ VaultError::Unauthorized,
    )]
    pub state: Account<'info, GlobalState>,

    /// CHECK: identity being removed, only its key is used
    pub user: UncheckedAccount<'info>,

    /// CHECK: address validated by seeds. Loaded in the handler so that a
    /// record that was never created fails with UserNotFound.
    #[account(
        mut,
        seeds = [USER_SEED, user.key().as_ref()],
        bump,
    )]
    pub user_account: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<RemoveUser>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let user = ctx.accounts.user.key();
    let info = ctx.accounts.user_account.to_account_info();

    let mut user_account = load_user_account(&info, ctx.program_id)?;

    let state = &mut ctx.accounts.state;
    settle_removal(state, user, &mut user_account, now)?;
    store_user_account(&info, &user_account)?;

    emit!(UserRemoved {
        user,
        remaining_balance: user_account.balance,
        total_users: state.total_users,
        timestamp: now,
    });

    Ok(())
}

/// Revoke `user` on an already loaded record
pub fn settle_removal(
    state: &mut GlobalState,
    user: Pubkey,
    user_account: &mut UserAccount,
    now: i64,
) -> Result<()> {
    require_keys_eq!(user_account.owner, user, VaultError::OwnerMismatch);
    state.remove_user(user_account, now)
}
