//! Guild index and overview.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::{discord::DiscordGuildInfo, guild_config::GuildList},
    service::discord::DiscordApi,
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordApi,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection, discord: &'a dyn DiscordApi) -> Self {
        Self { db, discord }
    }

    /// Lists every guild with a stored configuration.
    ///
    /// A database failure degrades to an empty list carrying a warning so the index
    /// page still renders.
    pub async fn list_guilds(&self) -> GuildList {
        match GuildConfigRepository::new(self.db).get_all_guild_ids().await {
            Ok(guild_ids) => GuildList {
                guild_ids,
                warning: None,
            },
            Err(err) => {
                tracing::warn!("Failed to list configured guilds: {}", err);
                GuildList {
                    guild_ids: Vec::new(),
                    warning: Some("Could not reach the database; no guilds are shown".to_string()),
                }
            }
        }
    }

    /// Gets live guild metadata for a configured guild.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordGuildInfo))` - Discord answered
    /// - `Ok(None)` - Discord did not answer; shown as unavailable
    /// - `Err(AppError::NotFound)` - The guild has no stored configuration
    pub async fn overview(&self, guild_id: u64) -> Result<Option<DiscordGuildInfo>, AppError> {
        if GuildConfigRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Guild {} has no configuration",
                guild_id
            )));
        }

        match self.discord.get_guild(guild_id).await {
            Ok(guild) => Ok(Some(guild)),
            Err(err) => {
                tracing::warn!("Failed to fetch guild {} from Discord: {}", guild_id, err);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::discord::fake::FakeDiscordApi;
    use sea_orm::ConnectionTrait;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn lists_configured_guilds() {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = factory::create_guild_config(db).await.unwrap();
        let discord = FakeDiscordApi::new();

        let list = GuildService::new(db, &discord).list_guilds().await;

        assert_eq!(list.guild_ids, vec![config.guild_id as u64]);
        assert!(list.warning.is_none());
    }

    /// Tests degradation when the table cannot be read.
    ///
    /// Expected: empty list with a warning
    #[tokio::test]
    async fn database_failure_degrades_to_warning() {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        db.execute_unprepared("DROP TABLE guild_configs")
            .await
            .unwrap();
        let discord = FakeDiscordApi::new();

        let list = GuildService::new(db, &discord).list_guilds().await;

        assert!(list.guild_ids.is_empty());
        assert!(list.warning.is_some());
    }

    #[tokio::test]
    async fn overview_degrades_when_discord_fails() {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = factory::create_guild_config(db).await.unwrap();
        let discord = FakeDiscordApi::new().failing_reads();

        let overview = GuildService::new(db, &discord)
            .overview(config.guild_id as u64)
            .await
            .unwrap();

        assert!(overview.is_none());
    }

    #[tokio::test]
    async fn overview_requires_configuration() {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let discord = FakeDiscordApi::new();

        let result = GuildService::new(db, &discord).overview(5).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
