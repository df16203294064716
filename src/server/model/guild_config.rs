//! Guild configuration domain models.

use serde_json::Value;

use crate::{
    model::{
        config::{GuildConfigDto, ShopRoleDto},
        guild::{GuildListDto, GuildSummaryDto},
    },
    server::{
        model::{
            discord::{DiscordChannel, DiscordRole},
            shop_role::ShopRole,
        },
        util::color::format_hex_color,
    },
};

/// Stored configuration of one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    pub guild_id: u64,
    /// Legacy denormalized column mirroring `SHOP_CHANNEL_ID`.
    pub shop_channel_id: Option<u64>,
    /// Legacy denormalized column mirroring `LEADERBOARD_THREAD_ID`.
    pub leaderboard_thread_id: Option<u64>,
    /// The nested configuration document exactly as stored.
    pub config_data: Value,
}

impl GuildConfig {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild_config::Model) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            shop_channel_id: entity.shop_channel_id.map(|id| id as u64),
            leaderboard_thread_id: entity.leaderboard_thread_id.map(|id| id as u64),
            config_data: entity.config_data,
        }
    }
}

/// Parameters for replacing a guild's stored configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGuildConfigParam {
    pub guild_id: u64,
    pub shop_channel_id: Option<u64>,
    pub leaderboard_thread_id: Option<u64>,
    pub config_data: Value,
}

/// Everything the configuration editor renders for one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfigView {
    /// Stored configuration with canonical keys defaulted.
    pub config: GuildConfig,
    /// Tracked shop roles joined with their live Discord role, if it still exists.
    pub shop_roles: Vec<(ShopRole, Option<DiscordRole>)>,
    /// Text, category, announcement and forum channels.
    pub channels: Vec<DiscordChannel>,
    pub roles: Vec<DiscordRole>,
}

impl GuildConfigView {
    pub fn into_dto(self) -> GuildConfigDto {
        GuildConfigDto {
            guild_id: self.config.guild_id,
            shop_channel_id: self.config.shop_channel_id,
            leaderboard_thread_id: self.config.leaderboard_thread_id,
            config_data: self.config.config_data,
            shop_roles: self
                .shop_roles
                .into_iter()
                .map(|(role, live)| ShopRoleDto {
                    role_id: role.role_id,
                    price: role.price,
                    creator_id: role.creator_id,
                    name: live.as_ref().map(|live| live.name.clone()),
                    color: live.map(|live| format_hex_color(live.color)),
                })
                .collect(),
            channels: self.channels.into_iter().map(DiscordChannel::into_dto).collect(),
            roles: self.roles.into_iter().map(DiscordRole::into_dto).collect(),
        }
    }
}

/// Configured guilds, plus a warning when the list could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildList {
    pub guild_ids: Vec<u64>,
    pub warning: Option<String>,
}

impl GuildList {
    pub fn into_dto(self) -> GuildListDto {
        GuildListDto {
            guilds: self
                .guild_ids
                .into_iter()
                .map(|guild_id| GuildSummaryDto { guild_id })
                .collect(),
            warning: self.warning,
        }
    }
}
