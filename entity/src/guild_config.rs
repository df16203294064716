use sea_orm::entity::prelude::*;

/// Per-guild configuration document.
///
/// `shop_channel_id` and `leaderboard_thread_id` are legacy denormalized columns; newer
/// documents carry the same values under `SHOP_CHANNEL_ID` / `LEADERBOARD_THREAD_ID`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_configs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    pub shop_channel_id: Option<i64>,
    pub leaderboard_thread_id: Option<i64>,
    pub config_data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
