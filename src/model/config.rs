use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::guild::{DiscordChannelDto, DiscordRoleDto};

/// Shop role as tracked locally, joined with its live Discord name and color.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ShopRoleDto {
    pub role_id: u64,
    pub price: i64,
    pub creator_id: Option<u64>,
    /// `None` when the role is missing from Discord or Discord did not answer.
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Everything the configuration editor needs to render one guild.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct GuildConfigDto {
    pub guild_id: u64,
    pub shop_channel_id: Option<u64>,
    pub leaderboard_thread_id: Option<u64>,
    #[schema(value_type = Object)]
    pub config_data: serde_json::Value,
    pub shop_roles: Vec<ShopRoleDto>,
    pub channels: Vec<DiscordChannelDto>,
    pub roles: Vec<DiscordRoleDto>,
}

/// Outcome of a configuration save.
///
/// `warnings` lists per-row problems that were skipped without aborting the save.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct SaveGuildConfigDto {
    pub guild_id: u64,
    pub created_roles: Vec<u64>,
    pub updated_roles: Vec<u64>,
    pub deleted_roles: Vec<u64>,
    pub warnings: Vec<String>,
}

/// Raw document replacement submitted as JSON text.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct RawGuildConfigDto {
    pub config_data: String,
}
