use crate::server::{
    data::custom_role::CustomRoleRepository, model::custom_role::UpdateCustomRoleParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod update;
