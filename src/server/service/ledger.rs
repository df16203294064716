//! Balance ledger writer.
//!
//! Admin balance corrections read the current balance, write the new one and append
//! the matching transaction row in one database transaction. The account row stays
//! locked from the read until commit. A zero-delta write still stores the balance
//! but records no transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{transaction::TransactionRepository, user::UserRepository},
    error::AppError,
    model::{
        transaction::CreateTransactionParam,
        user::{BalanceChange, SetBalanceParam},
    },
};

/// Transaction type recorded for dashboard balance corrections.
pub const ADMIN_SET_BALANCE: &str = "admin_set_balance";

/// Item name recorded for dashboard balance corrections.
pub const ADMIN_ADJUSTMENT_ITEM: &str = "Dashboard adjustment";

pub struct BalanceLedger<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BalanceLedger<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets a member's balance, creating the account if needed.
    ///
    /// # Returns
    /// - `Ok(BalanceChange)` - Previous and new balance, the delta and the audit row id
    /// - `Err(AppError::BadRequest)` - The delta does not fit in a 64-bit integer
    /// - `Err(AppError::DbErr)` - Any step failed; nothing was written
    pub async fn set_balance(&self, param: SetBalanceParam) -> Result<BalanceChange, AppError> {
        let txn = self.db.begin().await?;
        let users = UserRepository::new(&txn);

        let user = match users.find_for_update(param.guild_id, param.user_id).await? {
            Some(user) => user,
            None => users.get_or_create(param.guild_id, param.user_id).await?,
        };
        let previous_balance = user.balance;
        let amount_changed = param
            .new_balance
            .checked_sub(previous_balance)
            .ok_or_else(|| {
                AppError::BadRequest("Balance change is out of range".to_string())
            })?;

        users
            .set_balance(param.guild_id, param.user_id, param.new_balance)
            .await?;

        let transaction_id = if amount_changed != 0 {
            let transaction = TransactionRepository::new(&txn)
                .create(CreateTransactionParam {
                    guild_id: param.guild_id,
                    user_id: param.user_id,
                    transaction_type: ADMIN_SET_BALANCE.to_string(),
                    item_name: ADMIN_ADJUSTMENT_ITEM.to_string(),
                    amount_changed,
                    new_balance: param.new_balance,
                })
                .await?;
            Some(transaction.id)
        } else {
            None
        };

        txn.commit().await?;

        tracing::info!(
            "Set balance of user {} in guild {} from {} to {}",
            param.user_id,
            param.guild_id,
            previous_balance,
            param.new_balance
        );

        Ok(BalanceChange {
            previous_balance,
            new_balance: param.new_balance,
            amount_changed,
            transaction_id,
        })
    }
}
