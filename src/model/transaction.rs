use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TransactionDto {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub transaction_type: String,
    pub item_name: String,
    pub amount_changed: i64,
    pub new_balance: i64,
    pub timestamp: DateTime<Utc>,
}
