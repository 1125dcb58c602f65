use anchor_lang::prelude::*;

/// Custom error codes for the Custody Vault program
///
/// Every check runs before any mutation, so each of these aborts the
/// operation with no observable state change.
#[error_code]
pub enum VaultError {
    #[msg("Unauthorized - only the vault authority can perform this action")]
    Unauthorized,

    #[msg("User is not whitelisted")]
    NotWhitelisted,

    #[msg("User record belongs to a different owner")]
    OwnerMismatch,

    #[msg("Invalid token account owner")]
    InvalidOwner,

    #[msg("User record not found")]
    UserNotFound,

    #[msg("Vault state is already initialized")]
    AlreadyInitialized,

    #[msg("Invalid withdraw ID - does not match the expected sequence number")]
    InvalidWithdrawId,

    #[msg("Invalid validate ID - does not match the expected sequence number")]
    InvalidValidateId,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Invalid token mint - does not match the vault token")]
    InvalidMint,

    #[msg("Vault token account does not match the configured custody account")]
    InvalidVaultAccount,

    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}
