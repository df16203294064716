//! Discord guild role domain model.

use serenity::all::Role;

use crate::{model::guild::DiscordRoleDto, server::util::color::format_hex_color};

/// Live Discord role as returned by `GET /guilds/{id}/roles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordRole {
    /// Discord role ID.
    pub id: u64,
    /// Role display name.
    pub name: String,
    /// Role color as a 24-bit RGB integer.
    pub color: u32,
}

impl From<&Role> for DiscordRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.get(),
            name: role.name.clone(),
            color: role.colour.0,
        }
    }
}

impl DiscordRole {
    pub fn into_dto(self) -> DiscordRoleDto {
        DiscordRoleDto {
            id: self.id,
            name: self.name,
            color: format_hex_color(self.color),
        }
    }
}
