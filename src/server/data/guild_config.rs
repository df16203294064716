//! Guild configuration repository.
//!
//! Configuration rows are created by the bot when it joins a guild; the dashboard only
//! lists, reads and replaces them.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::model::guild_config::{GuildConfig, UpdateGuildConfigParam};

pub struct GuildConfigRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuildConfigRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the ids of every guild that has a stored configuration, ordered by id.
    ///
    /// Only the id column is selected so large documents are not loaded.
    pub async fn get_all_guild_ids(&self) -> Result<Vec<u64>, DbErr> {
        let ids: Vec<i64> = entity::prelude::GuildConfig::find()
            .select_only()
            .column(entity::guild_config::Column::GuildId)
            .order_by_asc(entity::guild_config::Column::GuildId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().map(|id| id as u64).collect())
    }

    /// Finds the stored configuration of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Configuration found
    /// - `Ok(None)` - The bot has not created a configuration for this guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfig>, DbErr> {
        let entity = entity::prelude::GuildConfig::find_by_id(guild_id as i64)
            .one(self.db)
            .await?;

        Ok(entity.map(GuildConfig::from_entity))
    }

    /// Replaces the document and legacy scalar columns of an existing configuration.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The updated configuration
    /// - `Err(DbErr::RecordNotUpdated)` - No configuration row exists for the guild
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateGuildConfigParam) -> Result<GuildConfig, DbErr> {
        let entity = entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Unchanged(param.guild_id as i64),
            shop_channel_id: ActiveValue::Set(param.shop_channel_id.map(|id| id as i64)),
            leaderboard_thread_id: ActiveValue::Set(
                param.leaderboard_thread_id.map(|id| id as i64),
            ),
            config_data: ActiveValue::Set(param.config_data),
        }
        .update(self.db)
        .await?;

        Ok(GuildConfig::from_entity(entity))
    }
}
