//! Discord REST access.
//!
//! Services talk to Discord only through the `DiscordApi` trait so reconciliation and
//! caching can be exercised against an in-process fake. The production implementation
//! wraps Serenity's HTTP client.

pub mod rest;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::server::{
    error::AppError,
    model::discord::{DiscordChannel, DiscordGuildInfo, DiscordMember, DiscordProfile, DiscordRole},
};

pub use rest::SerenityDiscordApi;

/// Maximum number of members requested from Discord in one listing.
///
/// No pagination is performed beyond this cap; member search and paging operate on
/// at most this many members.
pub const MEMBER_FETCH_LIMIT: u64 = 1000;

/// Discord REST operations the dashboard depends on.
///
/// Every call is a single request with no retry. Any non-2xx response or transport
/// failure is returned as `AppError::DiscordErr`.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// `GET /guilds/{guild_id}`
    async fn get_guild(&self, guild_id: u64) -> Result<DiscordGuildInfo, AppError>;

    /// `GET /guilds/{guild_id}/channels`
    async fn get_channels(&self, guild_id: u64) -> Result<Vec<DiscordChannel>, AppError>;

    /// `GET /guilds/{guild_id}/roles`
    async fn get_roles(&self, guild_id: u64) -> Result<Vec<DiscordRole>, AppError>;

    /// `POST /guilds/{guild_id}/roles`, returning the created role with its new id.
    async fn create_role(
        &self,
        guild_id: u64,
        name: &str,
        color: u32,
    ) -> Result<DiscordRole, AppError>;

    /// `PATCH /guilds/{guild_id}/roles/{role_id}`; `None` fields are left unchanged.
    async fn edit_role(
        &self,
        guild_id: u64,
        role_id: u64,
        name: Option<&str>,
        color: Option<u32>,
    ) -> Result<(), AppError>;

    /// `DELETE /guilds/{guild_id}/roles/{role_id}` with an optional audit log reason.
    async fn delete_role(
        &self,
        guild_id: u64,
        role_id: u64,
        reason: Option<&str>,
    ) -> Result<(), AppError>;

    /// `GET /guilds/{guild_id}/members?limit={limit}`
    async fn get_members(&self, guild_id: u64, limit: u64)
        -> Result<Vec<DiscordMember>, AppError>;

    /// `GET /users/{user_id}`
    async fn get_user(&self, user_id: u64) -> Result<DiscordProfile, AppError>;
}
