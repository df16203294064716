use crate::server::{data::shop_role::ShopRoleRepository, model::shop_role::UpsertShopRoleParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_guild_id;
mod upsert;
