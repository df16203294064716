pub use super::custom_role::Entity as CustomRole;
pub use super::guild_config::Entity as GuildConfig;
pub use super::shop_role::Entity as ShopRole;
pub use super::transaction::Entity as Transaction;
pub use super::user::Entity as User;
