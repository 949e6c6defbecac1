use anchor_lang::prelude::*;

use super::register_stake_asset::UpdateConfigData;
use crate::events::StakeAssetRemovedEvent;

/// Drop a mint from the whitelist. Existing escrowed entries are untouched;
/// only new non-native entries stop being accepted for this mint.
pub fn remove_stake_asset(ctx: Context<UpdateConfigData>, mint: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    config.ensure_admin(ctx.accounts.admin.key)?;
    config.remove_asset(&mint)?;

    emit!(StakeAssetRemovedEvent {
        mint,
        timestamp: clock.unix_timestamp,
    });

    msg!("Removed mint {} from whitelist", mint);

    Ok(())
}
