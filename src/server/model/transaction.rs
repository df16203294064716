//! Transaction log domain models.

use chrono::{DateTime, Utc};

use crate::model::transaction::TransactionDto;

/// Immutable audit record of a balance change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub transaction_type: String,
    pub item_name: String,
    /// Signed change applied to the balance.
    pub amount_changed: i64,
    /// Balance right after the change.
    pub new_balance: i64,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::transaction::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id as u64,
            user_id: entity.user_id as u64,
            transaction_type: entity.transaction_type,
            item_name: entity.item_name,
            amount_changed: entity.amount_changed,
            new_balance: entity.new_balance,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            guild_id: self.guild_id,
            user_id: self.user_id,
            transaction_type: self.transaction_type,
            item_name: self.item_name,
            amount_changed: self.amount_changed,
            new_balance: self.new_balance,
            timestamp: self.timestamp,
        }
    }
}

/// Parameters for appending a transaction row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTransactionParam {
    pub guild_id: u64,
    pub user_id: u64,
    pub transaction_type: String,
    pub item_name: String,
    pub amount_changed: i64,
    pub new_balance: i64,
}
