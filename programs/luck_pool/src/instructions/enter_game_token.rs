use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer as SplTransfer};

use crate::errors::PoolError;
use crate::events::GameEnteredEvent;
use crate::pricing;
use crate::states::*;

/// Enter an open round with a whitelisted SPL token stake.
///
/// The mint must carry a whitelist entry and the supplied feed account must
/// be the oracle registered for it. The stake is recorded at its native
/// valuation so it weighs against SOL entries in the same round; the tokens
/// themselves move into the game's token account.
pub fn enter_game_token(ctx: Context<EnterGameToken>, amount: u64, spot_price: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    let game = &mut ctx.accounts.game;
    let entry = &mut ctx.accounts.entry;
    let player = &ctx.accounts.player;
    let source = &ctx.accounts.from_ata;
    let mint = source.mint;
    let clock = Clock::get()?;

    game.ensure_open()?;
    require!(amount > 0, PoolError::InvalidAmount);
    require!(source.amount >= amount, PoolError::InsufficientFunds);

    let oracle = config
        .oracle_for(&mint)
        .ok_or(PoolError::NotWhitelisted)?;
    require_keys_eq!(
        ctx.accounts.oracle_feed.key(),
        oracle,
        PoolError::OracleMismatch
    );

    let native_value =
        pricing::native_value(amount, spot_price).ok_or(PoolError::Overflow)?;
    require!(native_value > 0, PoolError::InvalidAmount);

    let cpi_accounts = SplTransfer {
        from: source.to_account_info(),
        to: ctx.accounts.to_ata.to_account_info(),
        authority: player.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    entry.owner = player.key();
    entry.bump = ctx.bumps.entry;
    entry.stake(game.index, native_value)?;
    game.credit(native_value)?;

    emit!(GameEnteredEvent {
        game: game.key(),
        player: player.key(),
        mint: Some(mint),
        amount,
        native_value,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Player {} staked {} of mint {} (valued {}) in game {}",
        entry.owner,
        amount,
        mint,
        native_value,
        game.index
    );

    Ok(())
}

#[derive(Accounts)]
pub struct EnterGameToken<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, ConfigState>,

    #[account(
        mut,
        seeds = [GAME_SEED.as_bytes(), game_index_seed(game.index).as_bytes()],
        bump = game.bump,
    )]
    pub game: Account<'info, GameRound>,

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + PlayerEntry::INIT_SPACE,
        seeds = [PLAYER_SEED.as_bytes(), player.key().as_ref()],
        bump
    )]
    pub entry: Account<'info, PlayerEntry>,

    /// CHECK: only the key is read, compared against the registered oracle
    pub oracle_feed: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = from_ata.owner == player.key() @ PoolError::Unauthorized,
    )]
    pub from_ata: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = to_ata.owner == game.key() @ PoolError::Unauthorized,
        constraint = to_ata.mint == from_ata.mint @ PoolError::NotWhitelisted,
    )]
    pub to_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whitelisted_config(mint: Pubkey, oracle: Pubkey) -> ConfigState {
        let mut config = ConfigState {
            is_init: true,
            admins: vec![Pubkey::new_unique()],
            game_count: 1,
            whitelist: Vec::new(),
            commission_rate: DEFAULT_COMMISSION_RATE,
            bump: 254,
        };
        config.upsert_asset(mint, oracle).unwrap();
        config
    }

    #[test]
    fn unknown_mint_is_not_whitelisted() {
        let config = whitelisted_config(Pubkey::new_unique(), Pubkey::new_unique());
        let stranger = Pubkey::new_unique();
        assert_eq!(config.oracle_for(&stranger), None);
    }

    #[test]
    fn feed_must_match_registered_oracle() {
        let mint = Pubkey::new_unique();
        let oracle = Pubkey::new_unique();
        let config = whitelisted_config(mint, oracle);

        let supplied = Pubkey::new_unique();
        let registered = config.oracle_for(&mint).unwrap();
        let result = (|| {
            require_keys_eq!(supplied, registered, PoolError::OracleMismatch);
            Ok::<(), Error>(())
        })();
        assert!(result.is_err());

        let result = (|| {
            require_keys_eq!(oracle, registered, PoolError::OracleMismatch);
            Ok::<(), Error>(())
        })();
        assert!(result.is_ok());
    }

    #[test]
    fn stake_is_recorded_at_native_valuation() {
        let mut game = GameRound {
            index: 2,
            authority: Pubkey::new_unique(),
            escrowed_total: 0,
            status: GameStatus::Open,
            bump: 255,
        };
        let mut entry = PlayerEntry {
            owner: Pubkey::new_unique(),
            game_index: 0,
            staked_amount: 0,
            bump: 255,
        };

        let value = pricing::native_value(40, 3).unwrap();
        entry.stake(game.index, value).unwrap();
        game.credit(value).unwrap();

        assert_eq!(entry.staked_amount, 120);
        assert_eq!(game.escrowed_total, 120);
        assert_eq!(entry.game_index, 2);
    }
}
