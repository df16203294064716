//! Custom cosmetic role domain models.

use crate::model::member::{CustomRoleDto, UpdateCustomRoleDto};

/// One member's custom role in a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomRole {
    pub user_id: u64,
    pub guild_id: u64,
    pub role_id: u64,
    pub role_name: String,
    /// Hex color string as stored by the bot.
    pub role_color: String,
    pub role_style: Option<String>,
    pub gradient_color_1: Option<String>,
    pub gradient_color_2: Option<String>,
}

impl CustomRole {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::custom_role::Model) -> Self {
        Self {
            user_id: entity.user_id as u64,
            guild_id: entity.guild_id as u64,
            role_id: entity.role_id as u64,
            role_name: entity.role_name,
            role_color: entity.role_color,
            role_style: entity.role_style,
            gradient_color_1: entity.gradient_color_1,
            gradient_color_2: entity.gradient_color_2,
        }
    }

    pub fn into_dto(self) -> CustomRoleDto {
        CustomRoleDto {
            role_id: self.role_id,
            role_name: self.role_name,
            role_color: self.role_color,
            role_style: self.role_style,
            gradient_color_1: self.gradient_color_1,
            gradient_color_2: self.gradient_color_2,
        }
    }
}

/// In-place edit of an existing custom role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCustomRoleParam {
    pub user_id: u64,
    pub guild_id: u64,
    pub role_name: String,
    pub role_color: String,
    pub role_style: Option<String>,
    pub gradient_color_1: Option<String>,
    pub gradient_color_2: Option<String>,
}

impl UpdateCustomRoleParam {
    pub fn from_dto(guild_id: u64, user_id: u64, dto: UpdateCustomRoleDto) -> Self {
        Self {
            user_id,
            guild_id,
            role_name: dto.role_name,
            role_color: dto.role_color,
            role_style: dto.role_style,
            gradient_color_1: dto.gradient_color_1,
            gradient_color_2: dto.gradient_color_2,
        }
    }
}
