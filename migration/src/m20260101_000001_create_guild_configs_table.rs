use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The bot creates this table on first run; only create it when missing.
        manager
            .create_table(
                Table::create()
                    .table(GuildConfigs::Table)
                    .if_not_exists()
                    .col(big_integer(GuildConfigs::GuildId).primary_key())
                    .col(big_integer_null(GuildConfigs::ShopChannelId))
                    .col(big_integer_null(GuildConfigs::LeaderboardThreadId))
                    .col(json(GuildConfigs::ConfigData))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfigs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfigs {
    Table,
    GuildId,
    ShopChannelId,
    LeaderboardThreadId,
    ConfigData,
}
