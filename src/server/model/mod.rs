//! Domain models and operation parameter types used by the service and data layers.

pub mod custom_role;
pub mod discord;
pub mod guild_config;
pub mod member;
pub mod shop_role;
pub mod transaction;
pub mod user;
