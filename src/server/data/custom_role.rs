//! Custom role repository.
//!
//! Rows are created by the bot; the dashboard lists them and edits them in place.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::custom_role::{CustomRole, UpdateCustomRoleParam};

pub struct CustomRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomRoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every custom role of a guild ordered by owner.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<CustomRole>, DbErr> {
        let entities = entity::prelude::CustomRole::find()
            .filter(entity::custom_role::Column::GuildId.eq(guild_id as i64))
            .order_by_asc(entity::custom_role::Column::UserId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CustomRole::from_entity).collect())
    }

    /// Finds the custom role owned by a member.
    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<CustomRole>, DbErr> {
        let entity = entity::prelude::CustomRole::find_by_id((user_id as i64, guild_id as i64))
            .one(self.db)
            .await?;

        Ok(entity.map(CustomRole::from_entity))
    }

    /// Updates the display fields of an existing custom role.
    ///
    /// # Returns
    /// - `Ok(Some(CustomRole))` - The updated role
    /// - `Ok(None)` - The member has no custom role; nothing is created
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateCustomRoleParam) -> Result<Option<CustomRole>, DbErr> {
        if self.find(param.guild_id, param.user_id).await?.is_none() {
            return Ok(None);
        }

        let entity = entity::custom_role::ActiveModel {
            user_id: ActiveValue::Unchanged(param.user_id as i64),
            guild_id: ActiveValue::Unchanged(param.guild_id as i64),
            role_name: ActiveValue::Set(param.role_name),
            role_color: ActiveValue::Set(param.role_color),
            role_style: ActiveValue::Set(param.role_style),
            gradient_color_1: ActiveValue::Set(param.gradient_color_1),
            gradient_color_2: ActiveValue::Set(param.gradient_color_2),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Some(CustomRole::from_entity(entity)))
    }
}
