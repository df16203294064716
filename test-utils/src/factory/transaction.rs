//! Transaction log factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating transaction log rows.
pub struct TransactionFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    transaction_type: String,
    item_name: String,
    amount_changed: i64,
    new_balance: i64,
    timestamp: DateTime<Utc>,
}

impl<'a> TransactionFactory<'a> {
    /// Creates a new TransactionFactory with default values.
    ///
    /// Defaults:
    /// - guild_id / user_id: auto-incremented
    /// - transaction_type: `"purchase"`, item_name: `"Test Item"`
    /// - amount_changed: `-10`, new_balance: `90`
    /// - timestamp: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            user_id: next_id(),
            transaction_type: "purchase".to_string(),
            item_name: "Test Item".to_string(),
            amount_changed: -10,
            new_balance: 90,
            timestamp: Utc::now(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the user ID.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the signed amount and resulting balance.
    pub fn amount(mut self, amount_changed: i64, new_balance: i64) -> Self {
        self.amount_changed = amount_changed;
        self.new_balance = new_balance;
        self
    }

    /// Sets the timestamp.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the transaction into the database.
    pub async fn build(self) -> Result<entity::transaction::Model, DbErr> {
        entity::transaction::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            transaction_type: ActiveValue::Set(self.transaction_type),
            item_name: ActiveValue::Set(self.item_name),
            amount_changed: ActiveValue::Set(self.amount_changed),
            new_balance: ActiveValue::Set(self.new_balance),
            timestamp: ActiveValue::Set(self.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a transaction in the given guild with default values.
pub async fn create_transaction(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::transaction::Model, DbErr> {
    TransactionFactory::new(db).guild_id(guild_id).build().await
}
