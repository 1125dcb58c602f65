use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

use super::shared::{load_user_account, store_user_account};

/// Settle custodial balance between two user records, consuming the next
/// validate sequence number. No tokens move.
///
/// `from` and `to` may be the same user. The destination record is taken
/// as an unchecked account so that passing the same PDA twice does not
/// deserialize it into two diverging copies.
#[derive(Accounts)]
pub struct Validate<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
        has_one = authority @ VaultError::Unauthorized,
    )]
    pub state: Account<'info, GlobalState>,

    /// CHECK: source identity, only its key is used
    pub from: UncheckedAccount<'info>,

    /// CHECK: destination identity, only its key is used
    pub to: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [USER_SEED, from.key().as_ref()],
        bump = from_account.bump,
        constraint = from_account.owner == from.key() @ VaultError::OwnerMismatch,
    )]
    pub from_account: Account<'info, UserAccount>,

    /// CHECK: address validated by seeds, contents loaded in the handler
    #[account(
        mut,
        seeds = [USER_SEED, to.key().as_ref()],
        bump,
    )]
    pub to_account: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<Validate>, validate_id: u64, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let from = ctx.accounts.from.key();
    let to = ctx.accounts.to.key();

    let program_id = ctx.program_id;
    let info = ctx.accounts.to_account.to_account_info();

    let settled = settle_validation(
        &mut ctx.accounts.state,
        validate_id,
        amount,
        from,
        &mut ctx.accounts.from_account,
        to,
        || load_user_account(&info, program_id),
        now,
    )?;
    if let Some(to_account) = settled {
        store_user_account(&info, &to_account)?;
    }

    msg!(
        "Validate {} consumed, next expected {}",
        validate_id,
        ctx.accounts.state.expected_validate_id
    );

    emit!(Validated {
        validate_id,
        user_from: from,
        user_to: to,
        amount,
        timestamp: now,
    });

    Ok(())
}

/// Settle `amount` from the `from` record to the record of `to`
///
/// With `from == to` the source record is settled in place and `load_to`
/// is never called. Otherwise the destination is loaded, owner checked and
/// returned updated for the caller to write back.
#[allow(clippy::too_many_arguments)]
pub fn settle_validation<F>(
    state: &mut GlobalState,
    validate_id: u64,
    amount: u64,
    from: Pubkey,
    from_account: &mut UserAccount,
    to: Pubkey,
    load_to: F,
    now: i64,
) -> Result<Option<UserAccount>>
where
    F: FnOnce() -> Result<UserAccount>,
{
    require_keys_eq!(from_account.owner, from, VaultError::OwnerMismatch);

    if from == to {
        state.record_validation(validate_id, amount, from_account, None, now)?;
        return Ok(None);
    }

    let mut to_account = load_to()?;
    require_keys_eq!(to_account.owner, to, VaultError::OwnerMismatch);
    state.record_validation(validate_id, amount, from_account, Some(&mut to_account), now)?;
    Ok(Some(to_account))
}
