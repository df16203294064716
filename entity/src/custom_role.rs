use sea_orm::entity::prelude::*;

/// Cosmetic role owned by a single member.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "custom_roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    pub role_id: i64,
    pub role_name: String,
    pub role_color: String,
    pub role_style: Option<String>,
    pub gradient_color_1: Option<String>,
    pub gradient_color_2: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
