//! `DiscordApi` implementation over Serenity's REST client.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use serenity::{
    all::{GuildId, RoleId, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::discord::{DiscordChannel, DiscordGuildInfo, DiscordMember, DiscordProfile, DiscordRole},
    service::discord::DiscordApi,
};

/// Discord client authenticated with the bot token.
///
/// Cheap to clone; all clones share one HTTP client and its rate limiter.
#[derive(Clone)]
pub struct SerenityDiscordApi {
    http: Arc<Http>,
}

impl SerenityDiscordApi {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Builds a client from a bot token.
    pub fn from_token(token: &str) -> Self {
        Self::new(Arc::new(Http::new(token)))
    }
}

#[async_trait]
impl DiscordApi for SerenityDiscordApi {
    async fn get_guild(&self, guild_id: u64) -> Result<DiscordGuildInfo, AppError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;
        Ok(DiscordGuildInfo::from(&guild))
    }

    async fn get_channels(&self, guild_id: u64) -> Result<Vec<DiscordChannel>, AppError> {
        let channels = self.http.get_channels(GuildId::new(guild_id)).await?;
        Ok(channels.iter().map(DiscordChannel::from).collect())
    }

    async fn get_roles(&self, guild_id: u64) -> Result<Vec<DiscordRole>, AppError> {
        let roles = self.http.get_guild_roles(GuildId::new(guild_id)).await?;
        Ok(roles.iter().map(DiscordRole::from).collect())
    }

    async fn create_role(
        &self,
        guild_id: u64,
        name: &str,
        color: u32,
    ) -> Result<DiscordRole, AppError> {
        let body = json!({ "name": name, "color": color });
        let role = self
            .http
            .create_role(GuildId::new(guild_id), &body, None)
            .await?;
        Ok(DiscordRole::from(&role))
    }

    async fn edit_role(
        &self,
        guild_id: u64,
        role_id: u64,
        name: Option<&str>,
        color: Option<u32>,
    ) -> Result<(), AppError> {
        let mut body = Map::new();
        if let Some(name) = name {
            body.insert("name".to_string(), Value::from(name));
        }
        if let Some(color) = color {
            body.insert("color".to_string(), Value::from(color));
        }

        self.http
            .edit_role(GuildId::new(guild_id), RoleId::new(role_id), &body, None)
            .await?;
        Ok(())
    }

    async fn delete_role(
        &self,
        guild_id: u64,
        role_id: u64,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        self.http
            .delete_role(GuildId::new(guild_id), RoleId::new(role_id), reason)
            .await?;
        Ok(())
    }

    async fn get_members(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<DiscordMember>, AppError> {
        let members = self
            .http
            .get_guild_members(GuildId::new(guild_id), Some(limit), None)
            .await?;
        Ok(members.iter().map(DiscordMember::from).collect())
    }

    async fn get_user(&self, user_id: u64) -> Result<DiscordProfile, AppError> {
        let user = self.http.get_user(UserId::new(user_id)).await?;
        Ok(DiscordProfile::from(&user))
    }
}
