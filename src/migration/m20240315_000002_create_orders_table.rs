use sea_orm_migration::prelude::*;

use super::m20240315_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::Date).string().not_null())
                    .col(ColumnDef::new(Orders::Time).string().not_null())
                    .col(ColumnDef::new(Orders::Location).string().not_null())
                    .col(ColumnDef::new(Orders::TelegramId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_users_telegram_id")
                            .from(Orders::Table, Orders::TelegramId)
                            .to(Users::Table, Users::TelegramId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    Date,
    Time,
    Location,
    TelegramId,
}
