use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(pk_auto(Transactions::Id))
                    .col(big_integer(Transactions::GuildId))
                    .col(big_integer(Transactions::UserId))
                    .col(string(Transactions::TransactionType))
                    .col(string(Transactions::ItemName))
                    .col(big_integer(Transactions::AmountChanged))
                    .col(big_integer(Transactions::NewBalance))
                    .col(timestamp_with_time_zone(Transactions::Timestamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_transactions_guild_timestamp")
                    .table(Transactions::Table)
                    .col(Transactions::GuildId)
                    .col(Transactions::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transactions {
    Table,
    Id,
    GuildId,
    UserId,
    TransactionType,
    ItemName,
    AmountChanged,
    NewBalance,
    Timestamp,
}
