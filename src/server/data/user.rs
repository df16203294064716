//! Economy user repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::user::EconomyUser;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a member's economy account.
    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<EconomyUser>, DbErr> {
        let entity = entity::prelude::User::find_by_id((user_id as i64, guild_id as i64))
            .one(self.db)
            .await?;

        Ok(entity.map(EconomyUser::from_entity))
    }

    /// Finds a member's economy account and locks the row until the surrounding
    /// transaction ends.
    ///
    /// Backends without row locks (SQLite) serialize writers on the whole database
    /// instead, so the statement is issued without the lock clause there.
    pub async fn find_for_update(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<EconomyUser>, DbErr> {
        let entity = entity::prelude::User::find_by_id((user_id as i64, guild_id as i64))
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(entity.map(EconomyUser::from_entity))
    }

    /// Finds a member's economy account, creating it with a zero balance if absent.
    pub async fn get_or_create(&self, guild_id: u64, user_id: u64) -> Result<EconomyUser, DbErr> {
        if let Some(user) = self.find(guild_id, user_id).await? {
            return Ok(user);
        }

        let entity = entity::user::ActiveModel {
            user_id: ActiveValue::Set(user_id as i64),
            guild_id: ActiveValue::Set(guild_id as i64),
            balance: ActiveValue::Set(0),
            fake_boosts: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        Ok(EconomyUser::from_entity(entity))
    }

    /// Overwrites a member's balance.
    ///
    /// # Returns
    /// - `Ok(EconomyUser)` - The updated account
    /// - `Err(DbErr::RecordNotUpdated)` - No account exists for the member
    pub async fn set_balance(
        &self,
        guild_id: u64,
        user_id: u64,
        balance: i64,
    ) -> Result<EconomyUser, DbErr> {
        let entity = entity::user::ActiveModel {
            user_id: ActiveValue::Unchanged(user_id as i64),
            guild_id: ActiveValue::Unchanged(guild_id as i64),
            balance: ActiveValue::Set(balance),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(EconomyUser::from_entity(entity))
    }

    /// Gets the balances of the given members, skipping those without an account.
    pub async fn get_balances(
        &self,
        guild_id: u64,
        user_ids: &[u64],
    ) -> Result<HashMap<u64, i64>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::GuildId.eq(guild_id as i64))
            .filter(entity::user::Column::UserId.is_in(user_ids.iter().map(|id| *id as i64)))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|user| (user.user_id as u64, user.balance))
            .collect())
    }
}
