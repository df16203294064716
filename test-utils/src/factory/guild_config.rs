//! Guild configuration factory for creating test configuration rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

/// Factory for creating test guild configurations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .guild_id(987654321)
///     .config_data(serde_json::json!({ "MESSAGES": {} }))
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    shop_channel_id: Option<i64>,
    leaderboard_thread_id: Option<i64>,
    config_data: Value,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented
    /// - shop_channel_id / leaderboard_thread_id: `None`
    /// - config_data: empty JSON object
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            shop_channel_id: None,
            leaderboard_thread_id: None,
            config_data: Value::Object(Default::default()),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the legacy shop channel column.
    pub fn shop_channel_id(mut self, shop_channel_id: Option<i64>) -> Self {
        self.shop_channel_id = shop_channel_id;
        self
    }

    /// Sets the legacy leaderboard thread column.
    pub fn leaderboard_thread_id(mut self, leaderboard_thread_id: Option<i64>) -> Self {
        self.leaderboard_thread_id = leaderboard_thread_id;
        self
    }

    /// Sets the stored configuration document.
    pub fn config_data(mut self, config_data: Value) -> Self {
        self.config_data = config_data;
        self
    }

    /// Builds and inserts the guild configuration into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created configuration row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            shop_channel_id: ActiveValue::Set(self.shop_channel_id),
            leaderboard_thread_id: ActiveValue::Set(self.leaderboard_thread_id),
            config_data: ActiveValue::Set(self.config_data),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild configuration with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
