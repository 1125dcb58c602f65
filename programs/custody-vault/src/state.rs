use anchor_lang::prelude::*;

use crate::constants::{STATE_RESERVED, USER_RESERVED};
use crate::errors::VaultError;

/// Global vault state, one per deployment at the `[STATE_SEED]` PDA
///
/// The PDA is also the token authority of the custody account, so only
/// this program can move tokens out of custody.
///
/// `expected_withdraw_id` and `expected_validate_id` are the two sequence
/// cursors. Each is read, compared and advanced inside the same
/// transaction that mutates balances; the copy stored here is the only
/// source of truth for the next valid id.
#[account]
#[derive(Debug, PartialEq)]
pub struct GlobalState {
    /// Admin that manages the whitelist and signs withdraw/validate
    pub authority: Pubkey,          // 32 bytes

    /// Mint of the single token this deployment custodies
    pub token_mint: Pubkey,         // 32 bytes

    /// Custody token account (ATA of this PDA for `token_mint`)
    pub vault_token_account: Pubkey, // 32 bytes

    /// Next valid withdraw sequence number
    pub expected_withdraw_id: u64,  // 8 bytes

    /// Next valid validate sequence number
    pub expected_validate_id: u64,  // 8 bytes

    /// Users currently whitelisted
    pub total_users: u64,           // 8 bytes

    /// Sum of all user balances, mirrors the custody account balance
    pub total_locked_tokens: u64,   // 8 bytes

    /// Unix timestamp of the last mutation
    pub last_update: i64,           // 8 bytes

    /// Bump seed for the state PDA
    pub bump: u8,                   // 1 byte

    // Padding for future upgrades
    pub _reserved: [u8; STATE_RESERVED], // 64 bytes
}

/// Per-user custodial record at `[USER_SEED, owner]`
///
/// Created on first whitelist and never closed. Removing a user only
/// clears `is_whitelisted`; the balance stays attributed to the owner.
#[account]
#[derive(Debug, Default, PartialEq)]
pub struct UserAccount {
    /// User this record belongs to
    pub owner: Pubkey,              // 32 bytes

    /// Deposit gate
    pub is_whitelisted: bool,       // 1 byte

    /// Custodial balance in base token units
    pub balance: u64,               // 8 bytes

    /// Unix timestamp of the last deposit
    pub last_deposit: i64,          // 8 bytes

    /// Unix timestamp of the last withdrawal
    pub last_withdrawal: i64,       // 8 bytes

    /// Number of deposits made
    pub total_deposits: u64,        // 8 bytes

    /// Number of withdrawals paid out
    pub total_withdrawals: u64,     // 8 bytes

    /// Bump seed for the user PDA
    pub bump: u8,                   // 1 byte

    // Padding for future upgrades
    pub _reserved: [u8; USER_RESERVED], // 32 bytes
}

impl UserAccount {
    /// True once a whitelist call has claimed this record for someone
    pub fn is_claimed(&self) -> bool {
        self.owner != Pubkey::default()
    }
}

/// Exact-match sequence check. Rejects replays (`id < expected`) and
/// gaps (`id > expected`) alike.
fn check_sequence(expected: u64, id: u64, mismatch: VaultError) -> Result<()> {
    if id != expected {
        msg!("Sequence mismatch: expected {}, got {}", expected, id);
        return Err(mismatch.into());
    }
    Ok(())
}

impl Default for GlobalState {
    fn default() -> Self {
        Self {
            authority: Pubkey::default(),
            token_mint: Pubkey::default(),
            vault_token_account: Pubkey::default(),
            expected_withdraw_id: 0,
            expected_validate_id: 0,
            total_users: 0,
            total_locked_tokens: 0,
            last_update: 0,
            bump: 0,
            _reserved: [0; STATE_RESERVED],
        }
    }
}

impl GlobalState {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Populate a freshly allocated state record
    ///
    /// Fails with `AlreadyInitialized` if an authority is already set.
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        token_mint: Pubkey,
        vault_token_account: Pubkey,
        bump: u8,
        now: i64,
    ) -> Result<()> {
        require!(!self.is_initialized(), VaultError::AlreadyInitialized);

        self.authority = authority;
        self.token_mint = token_mint;
        self.vault_token_account = vault_token_account;
        self.expected_withdraw_id = 0;
        self.expected_validate_id = 0;
        self.total_users = 0;
        self.total_locked_tokens = 0;
        self.last_update = now;
        self.bump = bump;
        self._reserved = [0; STATE_RESERVED];
        Ok(())
    }

    /// Whitelist `owner`, creating the record on first use
    ///
    /// Returns `true` when the user went from not whitelisted to whitelisted.
    /// Whitelisting an already whitelisted user is accepted and changes
    /// nothing. The balance is never touched.
    pub fn add_user(
        &mut self,
        user: &mut UserAccount,
        owner: Pubkey,
        bump: u8,
        now: i64,
    ) -> Result<bool> {
        require!(
            !user.is_claimed() || user.owner == owner,
            VaultError::OwnerMismatch
        );

        if user.is_whitelisted {
            return Ok(false);
        }

        let total_users = self
            .total_users
            .checked_add(1)
            .ok_or(error!(VaultError::MathOverflow))?;

        user.owner = owner;
        user.is_whitelisted = true;
        user.bump = bump;
        self.total_users = total_users;
        self.last_update = now;
        Ok(true)
    }

    /// Revoke deposit rights. The record and its balance persist.
    pub fn remove_user(&mut self, user: &mut UserAccount, now: i64) -> Result<()> {
        require!(user.is_whitelisted, VaultError::NotWhitelisted);

        let total_users = self
            .total_users
            .checked_sub(1)
            .ok_or(error!(VaultError::MathOverflow))?;

        user.is_whitelisted = false;
        self.total_users = total_users;
        self.last_update = now;
        Ok(())
    }

    /// Credit a deposit of `amount` to `user`
    ///
    /// The caller moves the tokens into custody in the same transaction.
    pub fn record_deposit(&mut self, user: &mut UserAccount, amount: u64, now: i64) -> Result<()> {
        require!(user.is_whitelisted, VaultError::NotWhitelisted);
        require!(amount > 0, VaultError::InvalidAmount);

        let balance = user
            .balance
            .checked_add(amount)
            .ok_or(error!(VaultError::MathOverflow))?;
        let total_deposits = user
            .total_deposits
            .checked_add(1)
            .ok_or(error!(VaultError::MathOverflow))?;
        let total_locked_tokens = self
            .total_locked_tokens
            .checked_add(amount)
            .ok_or(error!(VaultError::MathOverflow))?;

        user.balance = balance;
        user.total_deposits = total_deposits;
        user.last_deposit = now;
        self.total_locked_tokens = total_locked_tokens;
        self.last_update = now;
        Ok(())
    }

    /// Consume `withdraw_id` and debit `amount` from `user`
    ///
    /// On any failure neither the counter nor the balance moves.
    /// The caller pays the tokens out of custody afterwards.
    pub fn record_withdrawal(
        &mut self,
        user: &mut UserAccount,
        withdraw_id: u64,
        amount: u64,
        now: i64,
    ) -> Result<()> {
        check_sequence(
            self.expected_withdraw_id,
            withdraw_id,
            VaultError::InvalidWithdrawId,
        )?;
        require!(amount > 0, VaultError::InvalidAmount);

        let balance = user
            .balance
            .checked_sub(amount)
            .ok_or(error!(VaultError::InsufficientBalance))?;
        let total_withdrawals = user
            .total_withdrawals
            .checked_add(1)
            .ok_or(error!(VaultError::MathOverflow))?;
        let total_locked_tokens = self
            .total_locked_tokens
            .checked_sub(amount)
            .ok_or(error!(VaultError::InsufficientVaultBalance))?;
        let next_id = self
            .expected_withdraw_id
            .checked_add(1)
            .ok_or(error!(VaultError::MathOverflow))?;

        user.balance = balance;
        user.total_withdrawals = total_withdrawals;
        user.last_withdrawal = now;
        self.total_locked_tokens = total_locked_tokens;
        self.expected_withdraw_id = next_id;
        self.last_update = now;
        Ok(())
    }

    /// Consume `validate_id` and move `amount` of bookkeeping from `from` to `to`
    ///
    /// `to == None` means the destination record is `from` itself: it is
    /// debited and credited in place, for a net change of zero. No tokens
    /// leave custody, so `total_locked_tokens` is untouched.
    pub fn record_validation(
        &mut self,
        validate_id: u64,
        amount: u64,
        from: &mut UserAccount,
        to: Option<&mut UserAccount>,
        now: i64,
    ) -> Result<()> {
        check_sequence(
            self.expected_validate_id,
            validate_id,
            VaultError::InvalidValidateId,
        )?;
        require!(amount > 0, VaultError::InvalidAmount);

        let debited = from
            .balance
            .checked_sub(amount)
            .ok_or(error!(VaultError::InsufficientBalance))?;
        let next_id = self
            .expected_validate_id
            .checked_add(1)
            .ok_or(error!(VaultError::MathOverflow))?;

        match to {
            Some(to) => {
                let credited = to
                    .balance
                    .checked_add(amount)
                    .ok_or(error!(VaultError::MathOverflow))?;
                from.balance = debited;
                to.balance = credited;
            }
            None => {
                from.balance = debited
                    .checked_add(amount)
                    .ok_or(error!(VaultError::MathOverflow))?;
            }
        }

        self.expected_validate_id = next_id;
        self.last_update = now;
        Ok(())
    }
}
