use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::PoolError;
use crate::events::GameEnteredEvent;
use crate::states::*;

/// Enter an open round with a native SOL stake.
///
/// The stake moves into the game PDA's lamport balance and stays escrowed
/// there until settlement. The player's entry record is created on first
/// use; entering the same round again tops the existing stake up, while a
/// live entry bound to another round is rejected.
pub fn enter_game_sol(ctx: Context<EnterGameSol>, amount: u64) -> Result<()> {
    let game = &mut ctx.accounts.game;
    let entry = &mut ctx.accounts.entry;
    let player = &ctx.accounts.player;
    let clock = Clock::get()?;

    game.ensure_open()?;
    require!(amount > 0, PoolError::InvalidAmount);
    // Rent for a fresh entry record was already debited during account
    // creation, so the remaining balance is what the stake draws from.
    require!(
        player.to_account_info().lamports() >= amount,
        PoolError::InsufficientFunds
    );

    let transfer_ix = system_program::Transfer {
        from: player.to_account_info(),
        to: game.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.system_program.to_account_info(), transfer_ix);
    system_program::transfer(cpi_ctx, amount)?;

    entry.owner = player.key();
    entry.bump = ctx.bumps.entry;
    entry.stake(game.index, amount)?;
    game.credit(amount)?;

    emit!(GameEnteredEvent {
        game: game.key(),
        player: player.key(),
        mint: None,
        amount,
        native_value: amount,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Player {} staked {} lamports in game {}",
        entry.owner,
        amount,
        game.index
    );

    Ok(())
}

#[derive(Accounts)]
pub struct EnterGameSol<'info> {
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

    pub system_program: Program<'info, System>,
}
