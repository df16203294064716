use serenity::all::{ChannelType, GuildChannel};

use crate::model::guild::DiscordChannelDto;

/// Channel types the configuration editor distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Type 0.
    Text,
    /// Type 4.
    Category,
    /// Type 5.
    Announcement,
    /// Type 15.
    Forum,
    Other,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Category => "category",
            Self::Announcement => "announcement",
            Self::Forum => "forum",
            Self::Other => "other",
        }
    }
}

impl From<ChannelType> for ChannelKind {
    fn from(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Text => Self::Text,
            ChannelType::Category => Self::Category,
            ChannelType::News => Self::Announcement,
            ChannelType::Forum => Self::Forum,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordChannel {
    pub id: u64,
    pub name: String,
    pub kind: ChannelKind,
    /// Category the channel is nested under, if any.
    pub parent_id: Option<u64>,
}

impl From<&GuildChannel> for DiscordChannel {
    fn from(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id.get(),
            name: channel.name.clone(),
            kind: ChannelKind::from(channel.kind),
            parent_id: channel.parent_id.map(|id| id.get()),
        }
    }
}

impl DiscordChannel {
    pub fn into_dto(self) -> DiscordChannelDto {
        DiscordChannelDto {
            id: self.id,
            name: self.name,
            kind: self.kind.as_str().to_string(),
            parent_id: self.parent_id,
        }
    }
}
