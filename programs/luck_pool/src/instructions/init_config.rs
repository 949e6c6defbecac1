use anchor_lang::prelude::*;

use crate::errors::PoolError;
use crate::events::ConfigInitializedEvent;
use crate::states::*;

/// Create the singleton config account.
///
/// This is the single source of truth for the admin set, the game counter
/// and the stake-asset whitelist. Every later instruction reads it.
pub fn init_config(ctx: Context<InitializeConfig>, admins: Vec<Pubkey>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    require!(!config.is_init, PoolError::AlreadyInitialized);
    require!(!admins.is_empty(), PoolError::NoAdmins);
    require!(admins.len() <= MAX_ADMINS, PoolError::TooManyAdmins);

    config.is_init = true;
    config.admins = admins;
    config.game_count = 0;
    config.whitelist = Vec::new();
    config.commission_rate = DEFAULT_COMMISSION_RATE;
    config.bump = ctx.bumps.config;

    emit!(ConfigInitializedEvent {
        config: config.key(),
        admins: config.admins.clone(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Config initialized with {} admin(s)", config.admins.len());
    msg!("  Commission rate: {}%", config.commission_rate);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = 8 + ConfigState::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, ConfigState>,

    pub system_program: Program<'info, System>,
}
