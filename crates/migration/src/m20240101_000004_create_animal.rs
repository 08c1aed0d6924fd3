//! Create `animal` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Animal::Table)
                    .if_not_exists()
                    .col(pk_auto(Animal::Id))
                    .col(string_len(Animal::Name, 100).not_null())
                    .col(integer(Animal::Age).not_null())
                    .col(boolean(Animal::Adopted).not_null().default(false))
                    .col(string_len(Animal::HealthStatus, 50).not_null().default("healthy"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Animal::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Animal {
    Table,
    Id,
    Name,
    Age,
    Adopted,
    HealthStatus,
}
