use serenity::all::PartialGuild;

use crate::model::guild::GuildOverviewDto;

/// Guild metadata from `GET /guilds/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordGuildInfo {
    pub guild_id: u64,
    pub name: String,
    pub icon_url: Option<String>,
}

impl From<&PartialGuild> for DiscordGuildInfo {
    fn from(guild: &PartialGuild) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            icon_url: guild.icon_url(),
        }
    }
}

impl DiscordGuildInfo {
    pub fn into_dto(self) -> GuildOverviewDto {
        GuildOverviewDto {
            guild_id: self.guild_id,
            name: Some(self.name),
            icon_url: self.icon_url,
        }
    }
}
