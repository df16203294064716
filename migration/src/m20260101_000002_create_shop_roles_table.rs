use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopRoles::Table)
                    .if_not_exists()
                    .col(big_integer(ShopRoles::RoleId).primary_key())
                    .col(big_integer(ShopRoles::GuildId))
                    .col(big_integer(ShopRoles::Price))
                    .col(big_integer_null(ShopRoles::CreatorId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_shop_roles_guild_id")
                    .table(ShopRoles::Table)
                    .col(ShopRoles::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopRoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopRoles {
    Table,
    RoleId,
    GuildId,
    Price,
    CreatorId,
}
