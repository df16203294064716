use crate::server::{
    data::guild_config::GuildConfigRepository, model::guild_config::UpdateGuildConfigParam,
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod get_all_guild_ids;
mod update;
