//! Custom role factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating custom cosmetic role rows.
pub struct CustomRoleFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    guild_id: i64,
    role_id: i64,
    role_name: String,
    role_color: String,
    role_style: Option<String>,
}

impl<'a> CustomRoleFactory<'a> {
    /// Creates a new CustomRoleFactory with default values.
    ///
    /// Defaults:
    /// - user_id / guild_id / role_id: auto-incremented
    /// - role_name: `"Custom {role_id}"`, role_color: `"#FFFFFF"`
    /// - role_style: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let role_id = next_id();
        Self {
            db,
            user_id: next_id(),
            guild_id: next_id(),
            role_id,
            role_name: format!("Custom {}", role_id),
            role_color: "#FFFFFF".to_string(),
            role_style: None,
        }
    }

    /// Sets the owning user ID.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the Discord role ID.
    pub fn role_id(mut self, role_id: i64) -> Self {
        self.role_id = role_id;
        self
    }

    /// Sets the role display name.
    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = role_name.into();
        self
    }

    /// Sets the role color hex string.
    pub fn role_color(mut self, role_color: impl Into<String>) -> Self {
        self.role_color = role_color.into();
        self
    }

    /// Sets the role style.
    pub fn role_style(mut self, role_style: Option<String>) -> Self {
        self.role_style = role_style;
        self
    }

    /// Builds and inserts the custom role into the database.
    pub async fn build(self) -> Result<entity::custom_role::Model, DbErr> {
        entity::custom_role::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            role_id: ActiveValue::Set(self.role_id),
            role_name: ActiveValue::Set(self.role_name),
            role_color: ActiveValue::Set(self.role_color),
            role_style: ActiveValue::Set(self.role_style),
            gradient_color_1: ActiveValue::Set(None),
            gradient_color_2: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a custom role owned by a fresh user in the given guild.
pub async fn create_custom_role(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::custom_role::Model, DbErr> {
    CustomRoleFactory::new(db).guild_id(guild_id).build().await
}
