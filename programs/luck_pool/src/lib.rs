use anchor_lang::prelude::*;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pricing;
pub mod states;
use instructions::*;
declare_id!("8Y9vC2nG3LwfSDqHHdYMMdY4TU5EmMx68JYi2X1ugBSr");

#[program]
pub mod luck_pool {
    use super::*;

    pub fn init_config(ctx: Context<InitializeConfig>, admins: Vec<Pubkey>) -> Result<()> {
        instructions::init_config(ctx, admins)
    }

    pub fn init_game(ctx: Context<InitializeGame>) -> Result<()> {
        instructions::init_game(ctx)
    }

    pub fn register_stake_asset(
        ctx: Context<UpdateConfigData>,
        mint: Pubkey,
        oracle: Pubkey,
    ) -> Result<()> {
        instructions::register_stake_asset(ctx, mint, oracle)
    }

    pub fn remove_stake_asset(ctx: Context<UpdateConfigData>, mint: Pubkey) -> Result<()> {
        instructions::remove_stake_asset(ctx, mint)
    }

    pub fn update_commission_rate(ctx: Context<UpdateConfigData>, rate: u64) -> Result<()> {
        instructions::update_commission_rate(ctx, rate)
    }

    pub fn enter_game_sol(ctx: Context<EnterGameSol>, amount: u64) -> Result<()> {
        instructions::enter_game_sol(ctx, amount)
    }

    pub fn enter_game_token(
        ctx: Context<EnterGameToken>,
        amount: u64,
        spot_price: u64,
    ) -> Result<()> {
        instructions::enter_game_token(ctx, amount, spot_price)
    }

    pub fn close_game(ctx: Context<CloseGame>) -> Result<()> {
        instructions::close_game(ctx)
    }
}
