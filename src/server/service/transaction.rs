//! Transaction history.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::transaction::TransactionRepository, error::AppError, model::transaction::Transaction,
};

/// Number of transactions shown on a guild's history page.
pub const RECENT_TRANSACTION_LIMIT: u64 = 100;

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recent transactions of a guild, newest first.
    pub async fn get_recent(&self, guild_id: u64) -> Result<Vec<Transaction>, AppError> {
        Ok(TransactionRepository::new(self.db)
            .get_recent_by_guild(guild_id, RECENT_TRANSACTION_LIMIT)
            .await?)
    }
}
