mod custom_role;
mod guild_config;
mod shop_role;
mod transaction;
mod user;
