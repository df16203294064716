use crate::server::{
    data::transaction::TransactionRepository, model::transaction::CreateTransactionParam,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_recent_by_guild;
