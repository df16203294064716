//! Shop role repository.
//!
//! The local `shop_roles` table is the source of truth for price and ownership of
//! purchasable roles; existence is owned by Discord and enforced by the reconciler.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::shop_role::{ShopRole, UpsertShopRoleParam};

pub struct ShopRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShopRoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all shop roles of a guild ordered by role id.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<ShopRole>, DbErr> {
        let entities = entity::prelude::ShopRole::find()
            .filter(entity::shop_role::Column::GuildId.eq(guild_id as i64))
            .order_by_asc(entity::shop_role::Column::RoleId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ShopRole::from_entity).collect())
    }

    /// Inserts a shop role, or updates the price of an existing one.
    ///
    /// Only the price column is touched on conflict, so `creator_id` keeps the value
    /// written when the row was first inserted.
    ///
    /// # Returns
    /// - `Ok(ShopRole)` - The inserted or updated role
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertShopRoleParam) -> Result<ShopRole, DbErr> {
        let entity = entity::prelude::ShopRole::insert(entity::shop_role::ActiveModel {
            role_id: ActiveValue::Set(param.role_id as i64),
            guild_id: ActiveValue::Set(param.guild_id as i64),
            price: ActiveValue::Set(param.price),
            creator_id: ActiveValue::Set(param.creator_id.map(|id| id as i64)),
        })
        .on_conflict(
            OnConflict::column(entity::shop_role::Column::RoleId)
                .update_column(entity::shop_role::Column::Price)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ShopRole::from_entity(entity))
    }

    /// Deletes a shop role of a guild.
    ///
    /// # Returns
    /// - `Ok(())` - Role deleted (or didn't exist)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64, role_id: u64) -> Result<(), DbErr> {
        entity::prelude::ShopRole::delete_many()
            .filter(entity::shop_role::Column::GuildId.eq(guild_id as i64))
            .filter(entity::shop_role::Column::RoleId.eq(role_id as i64))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
