pub mod close_game;
pub mod enter_game_sol;
pub mod enter_game_token;
pub mod init_config;
pub mod init_game;
pub mod register_stake_asset;
pub mod remove_stake_asset;
pub mod update_commission_rate;

pub use close_game::*;
pub use enter_game_sol::*;
pub use enter_game_token::*;
pub use init_config::*;
pub use init_game::*;
pub use register_stake_asset::*;
pub use remove_stake_asset::*;
pub use update_commission_rate::*;
