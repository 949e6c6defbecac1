use anchor_lang::prelude::*;

use crate::errors::PoolError;
use crate::events::GameOpenedEvent;
use crate::states::*;

/// Open a new game round at the next counter value.
///
/// The round's address is derived from the decimal form of `game_count`, so
/// indices are dense: the set of rounds ever opened is exactly
/// `0..game_count`. Two racing calls both write the config account, so the
/// runtime commits only one per ordering slot and the loser retries against
/// the incremented counter.
pub fn init_game(ctx: Context<InitializeGame>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let game = &mut ctx.accounts.game;
    let clock = Clock::get()?;

    config.ensure_admin(ctx.accounts.admin.key)?;

    game.index = config.game_count;
    game.authority = ctx.accounts.admin.key();
    game.escrowed_total = 0;
    game.status = GameStatus::Open;
    game.bump = ctx.bumps.game;

    config.game_count = config
        .game_count
        .checked_add(1)
        .ok_or(PoolError::Overflow)?;

    emit!(GameOpenedEvent {
        game: game.key(),
        index: game.index,
        authority: game.authority,
        timestamp: clock.unix_timestamp,
    });

    msg!("Game {} opened by {}", game.index, game.authority);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeGame<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, ConfigState>,

    #[account(
        init,
        payer = admin,
        space = 8 + GameRound::INIT_SPACE,
        seeds = [GAME_SEED.as_bytes(), game_index_seed(config.game_count).as_bytes()],
        bump
    )]
    pub game: Account<'info, GameRound>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_admin_is_rejected() {
        let config = ConfigState {
            is_init: true,
            admins: vec![Pubkey::new_unique()],
            game_count: 0,
            whitelist: Vec::new(),
            commission_rate: DEFAULT_COMMISSION_RATE,
            bump: 254,
        };
        let outsider = Pubkey::new_unique();
        assert!(config.ensure_admin(&outsider).is_err());
    }

    #[test]
    fn counter_increments_without_gaps() {
        let mut config = ConfigState {
            is_init: true,
            admins: vec![Pubkey::new_unique()],
            game_count: 0,
            whitelist: Vec::new(),
            commission_rate: DEFAULT_COMMISSION_RATE,
            bump: 254,
        };
        let mut indices = Vec::new();
        for _ in 0..4 {
            indices.push(config.game_count);
            config.game_count = config.game_count.checked_add(1).unwrap();
        }
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(config.game_count, 4);
    }
}
