use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomRoles::Table)
                    .if_not_exists()
                    .col(big_integer(CustomRoles::UserId))
                    .col(big_integer(CustomRoles::GuildId))
                    .col(big_integer(CustomRoles::RoleId))
                    .col(string(CustomRoles::RoleName))
                    .col(string(CustomRoles::RoleColor))
                    .col(string_null(CustomRoles::RoleStyle))
                    .col(string_null(CustomRoles::GradientColor1))
                    .col(string_null(CustomRoles::GradientColor2))
                    .primary_key(
                        Index::create()
                            .col(CustomRoles::UserId)
                            .col(CustomRoles::GuildId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomRoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomRoles {
    Table,
    UserId,
    GuildId,
    RoleId,
    RoleName,
    RoleColor,
    RoleStyle,
    GradientColor1,
    GradientColor2,
}
