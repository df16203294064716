//! SeaORM entity models for the tables shared between the dashboard and the economy bot.

pub mod prelude;

pub mod custom_role;
pub mod guild_config;
pub mod shop_role;
pub mod transaction;
pub mod user;
