use anchor_lang::prelude::*;

use crate::events::StakeAssetRegisteredEvent;
use crate::states::*;

/// Whitelist a stake mint and bind it to its price feed.
///
/// Registering a mint that is already whitelisted rebinds its oracle instead
/// of failing, so there is never more than one entry per mint. The feed is
/// not inspected here; it is matched against the account supplied at entry
/// time.
pub fn register_stake_asset(
    ctx: Context<UpdateConfigData>,
    mint: Pubkey,
    oracle: Pubkey,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    config.ensure_admin(ctx.accounts.admin.key)?;
    config.upsert_asset(mint, oracle)?;

    emit!(StakeAssetRegisteredEvent {
        mint,
        oracle,
        timestamp: clock.unix_timestamp,
    });

    msg!("Whitelisted mint {} with oracle {}", mint, oracle);

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfigData<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
    )]
    pub config: Account<'info, ConfigState>,
}
