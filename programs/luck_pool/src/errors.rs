use anchor_lang::prelude::*;

#[error_code]
pub enum PoolError {
    #[msg("Config already initialized")]
    AlreadyInitialized,
    #[msg("Signer is not a config admin")]
    Unauthorized,
    #[msg("Game round is not open for entries")]
    GameNotOpen,
    #[msg("Player balance cannot cover the stake")]
    InsufficientFunds,
    #[msg("Stake amount must be greater than zero")]
    InvalidAmount,
    #[msg("Supplied price feed does not match the registered oracle")]
    OracleMismatch,
    #[msg("Stake mint is not whitelisted")]
    NotWhitelisted,
    #[msg("Admin list must contain at least one identity")]
    NoAdmins,
    #[msg("Admin list exceeds capacity")]
    TooManyAdmins,
    #[msg("Whitelist is full")]
    WhitelistFull,
    #[msg("Stake mint was not found in the whitelist")]
    AssetNotFound,
    #[msg("Commission rate out of range")]
    CommissionRateOutOfRange,
    #[msg("Player entry is bound to a different game round")]
    EntryGameMismatch,
    #[msg("Arithmetic overflow")]
    Overflow,
}
