//! Transaction log repository. Rows are append-only.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::transaction::{CreateTransactionParam, Transaction};

pub struct TransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a transaction stamped with the current time.
    pub async fn create(&self, param: CreateTransactionParam) -> Result<Transaction, DbErr> {
        let entity = entity::transaction::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id as i64),
            user_id: ActiveValue::Set(param.user_id as i64),
            transaction_type: ActiveValue::Set(param.transaction_type),
            item_name: ActiveValue::Set(param.item_name),
            amount_changed: ActiveValue::Set(param.amount_changed),
            new_balance: ActiveValue::Set(param.new_balance),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Transaction::from_entity(entity))
    }

    /// Gets the most recent transactions of a guild, newest first.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to read
    /// - `limit` - Maximum number of rows returned
    pub async fn get_recent_by_guild(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, DbErr> {
        let entities = entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::GuildId.eq(guild_id as i64))
            .order_by_desc(entity::transaction::Column::Timestamp)
            .order_by_desc(entity::transaction::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Transaction::from_entity).collect())
    }
}
