//! Create `cabinet` table.
//!
//! Both `name` and `number` carry unique constraints; the service pre-checks
//! them but these constraints are the authoritative guard.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cabinet::Table)
                    .if_not_exists()
                    .col(pk_auto(Cabinet::Id))
                    .col(string_len(Cabinet::Name, 100).unique_key().not_null())
                    .col(integer(Cabinet::Number).unique_key().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cabinet::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cabinet {
    Table,
    Id,
    Name,
    Number,
}
