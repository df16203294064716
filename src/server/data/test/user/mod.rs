use crate::server::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_for_update;
mod get_balances;
mod get_or_create;
mod set_balance;
