use anchor_lang::prelude::*;

use crate::events::GameClosedEvent;
use crate::states::*;

/// Close a round to new entries. Closed is terminal; settlement of the
/// escrowed balance is handled off this instruction surface.
pub fn close_game(ctx: Context<CloseGame>) -> Result<()> {
    let config = &ctx.accounts.config;
    let game = &mut ctx.accounts.game;
    let clock = Clock::get()?;

    config.ensure_admin(ctx.accounts.admin.key)?;
    game.ensure_open()?;

    game.status = GameStatus::Closed;

    emit!(GameClosedEvent {
        game: game.key(),
        index: game.index,
        escrowed_total: game.escrowed_total,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Game {} closed with {} escrowed",
        game.index,
        game.escrowed_total
    );

    Ok(())
}

#[derive(Accounts)]
pub struct CloseGame<'info> {
    pub admin: Signer<'info>,

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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_is_terminal() {
        let mut game = GameRound {
            index: 0,
            authority: Pubkey::new_unique(),
            escrowed_total: 25,
            status: GameStatus::Open,
            bump: 255,
        };
        game.ensure_open().unwrap();
        game.status = GameStatus::Closed;
        assert!(game.ensure_open().is_err());
    }
}
