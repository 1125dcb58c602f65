use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

use crate::{constants::*, errors::VaultError, state::UserAccount};

/// Global state PDA and its bump
pub fn state_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED], program_id)
}

/// User record PDA for `owner` and its bump
pub fn user_address(owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_SEED, owner.as_ref()], program_id)
}

/// Read a user record that must already exist
///
/// An account that is not owned by this program, or has no data, has never
/// been whitelisted and maps to `UserNotFound`.
pub fn load_user_account(info: &AccountInfo, program_id: &Pubkey) -> Result<UserAccount> {
    if info.owner != program_id || info.data_is_empty() {
        return err!(VaultError::UserNotFound);
    }
    let data = info.try_borrow_data()?;
    UserAccount::try_deserialize(&mut &data[..])
}

/// Write a user record loaded with `load_user_account` back to its account
pub fn store_user_account(info: &AccountInfo, user: &UserAccount) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data;
    user.try_serialize(&mut dst)
}

// Move tokens between two accounts of the vault mint.
// When the source is the custody account, the state PDA seeds must be given.
pub fn transfer_tokens<'info>(
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    amount: u64,
    mint: &Account<'info, Mint>,
    authority: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    owning_pda_seeds: Option<&[&[u8]]>,
) -> Result<()> {
    let transfer_accounts = TransferChecked {
        from: from.to_account_info(),
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority: authority.clone(),
    };

    let signer_seeds = owning_pda_seeds.map(|seeds| [seeds]);

    transfer_checked(
        if let Some(seeds) = signer_seeds.as_ref() {
            CpiContext::new_with_signer(token_program.to_account_info(), transfer_accounts, seeds)
        } else {
            CpiContext::new(token_program.to_account_info(), transfer_accounts)
        },
        amount,
        mint.decimals,
    )
}
