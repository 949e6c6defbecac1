use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitializedEvent {
    pub config: Pubkey,
    pub admins: Vec<Pubkey>,
    pub timestamp: i64,
}

#[event]
pub struct GameOpenedEvent {
    pub game: Pubkey,
    pub index: u64,
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct StakeAssetRegisteredEvent {
    pub mint: Pubkey,
    pub oracle: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct StakeAssetRemovedEvent {
    pub mint: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CommissionRateUpdatedEvent {
    pub commission_rate: u64,
    pub timestamp: i64,
}

#[event]
pub struct GameEnteredEvent {
    pub game: Pubkey,
    pub player: Pubkey,
    /// None for native SOL entries, the stake mint for SPL entries.
    pub mint: Option<Pubkey>,
    pub amount: u64,
    pub native_value: u64,
    pub timestamp: i64,
}

#[event]
pub struct GameClosedEvent {
    pub game: Pubkey,
    pub index: u64,
    pub escrowed_total: u64,
    pub timestamp: i64,
}
