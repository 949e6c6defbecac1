use anchor_lang::prelude::*;

use crate::errors::PoolError;

// PDA seeds
pub const CONFIG_SEED: &str = "config";
pub const GAME_SEED: &str = "game";
pub const PLAYER_SEED: &str = "player";

pub const MAX_ADMINS: usize = 5;
pub const MAX_WHITELISTED: usize = 10;

/// Commission in whole percent, applied by the settlement path.
pub const DEFAULT_COMMISSION_RATE: u64 = 5;
pub const MAX_COMMISSION_RATE: u64 = 100;

/// Decimal-string seed for a game round PDA. Clients derive game addresses
/// from the counter's base-10 text, so this formatting is part of the wire
/// contract and must not change to a binary encoding.
pub fn game_index_seed(index: u64) -> String {
    index.to_string()
}

#[derive(AnchorDeserialize, AnchorSerialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum GameStatus {
    Open,
    Closed,
}

/// Whitelist record binding an accepted stake mint to the only price feed
/// allowed to value it.
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub struct StakeAsset {
    pub mint: Pubkey,
    pub oracle: Pubkey,
}

#[account]
#[derive(InitSpace)]
pub struct ConfigState {
    pub is_init: bool,
    #[max_len(MAX_ADMINS)]
    pub admins: Vec<Pubkey>,
    pub game_count: u64,
    #[max_len(MAX_WHITELISTED)]
    pub whitelist: Vec<StakeAsset>,
    pub commission_rate: u64,
    pub bump: u8,
}

impl ConfigState {
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admins.contains(key)
    }

    pub fn ensure_admin(&self, key: &Pubkey) -> Result<()> {
        require!(self.is_admin(key), PoolError::Unauthorized);
        Ok(())
    }

    /// Insert the mint or, if already whitelisted, rebind its oracle.
    /// The capacity bound only applies to genuine inserts.
    pub fn upsert_asset(&mut self, mint: Pubkey, oracle: Pubkey) -> Result<()> {
        if let Some(entry) = self.whitelist.iter_mut().find(|a| a.mint == mint) {
            entry.oracle = oracle;
            return Ok(());
        }
        require!(
            self.whitelist.len() < MAX_WHITELISTED,
            PoolError::WhitelistFull
        );
        self.whitelist.push(StakeAsset { mint, oracle });
        Ok(())
    }

    pub fn remove_asset(&mut self, mint: &Pubkey) -> Result<()> {
        let index = self
            .whitelist
            .iter()
            .position(|a| a.mint == *mint)
            .ok_or(PoolError::AssetNotFound)?;
        self.whitelist.remove(index);
        Ok(())
    }

    pub fn oracle_for(&self, mint: &Pubkey) -> Option<Pubkey> {
        self.whitelist
            .iter()
            .find(|a| a.mint == *mint)
            .map(|a| a.oracle)
    }

    pub fn set_commission_rate(&mut self, rate: u64) -> Result<()> {
        require!(
            rate <= MAX_COMMISSION_RATE,
            PoolError::CommissionRateOutOfRange
        );
        self.commission_rate = rate;
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct GameRound {
    pub index: u64,
    pub authority: Pubkey,
    pub escrowed_total: u64,
    pub status: GameStatus,
    pub bump: u8,
}

impl GameRound {
    pub fn ensure_open(&self) -> Result<()> {
        require!(self.status == GameStatus::Open, PoolError::GameNotOpen);
        Ok(())
    }

    /// Record an accepted stake. Escrow only grows while the round is open.
    pub fn credit(&mut self, value: u64) -> Result<()> {
        self.ensure_open()?;
        self.escrowed_total = self
            .escrowed_total
            .checked_add(value)
            .ok_or(PoolError::Overflow)?;
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct PlayerEntry {
    pub owner: Pubkey,
    pub game_index: u64,
    pub staked_amount: u64,
    pub bump: u8,
}

impl PlayerEntry {
    pub fn is_live(&self) -> bool {
        self.staked_amount > 0
    }

    /// Add stake to this entry. A fresh record is stamped with the round it
    /// enters; a live record only tops up within that same round.
    pub fn stake(&mut self, game_index: u64, value: u64) -> Result<()> {
        if self.is_live() {
            require!(
                self.game_index == game_index,
                PoolError::EntryGameMismatch
            );
        } else {
            self.game_index = game_index;
        }
        self.staked_amount = self
            .staked_amount
            .checked_add(value)
            .ok_or(PoolError::Overflow)?;
        Ok(())
    }
}
