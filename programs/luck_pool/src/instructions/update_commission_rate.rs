use anchor_lang::prelude::*;

use super::register_stake_asset::UpdateConfigData;
use crate::events::CommissionRateUpdatedEvent;

/// Set the commission taken by the settlement path, in whole percent.
pub fn update_commission_rate(ctx: Context<UpdateConfigData>, rate: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    config.ensure_admin(ctx.accounts.admin.key)?;
    config.set_commission_rate(rate)?;

    emit!(CommissionRateUpdatedEvent {
        commission_rate: rate,
        timestamp: clock.unix_timestamp,
    });

    msg!("Commission rate set to {}%", rate);

    Ok(())
}
