use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct GuildSummaryDto {
    pub guild_id: u64,
}

/// Guilds with a stored configuration.
///
/// `warning` is set when the database could not be reached and the list is empty
/// for that reason rather than because no guild is configured.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct GuildListDto {
    pub guilds: Vec<GuildSummaryDto>,
    pub warning: Option<String>,
}

/// Live guild metadata; `None` fields mean Discord did not answer.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct GuildOverviewDto {
    pub guild_id: u64,
    pub name: Option<String>,
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct DiscordChannelDto {
    pub id: u64,
    pub name: String,
    /// `text`, `category`, `announcement`, `forum` or `other`.
    pub kind: String,
    pub parent_id: Option<u64>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct DiscordRoleDto {
    pub id: u64,
    pub name: String,
    /// Hex color, e.g. `#FF5733`.
    pub color: String,
}
