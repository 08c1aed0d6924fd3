//! Create `participant` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participant::Table)
                    .if_not_exists()
                    .col(pk_auto(Participant::Id))
                    .col(string_len(Participant::Name, 255).not_null())
                    .col(string_len(Participant::Email, 255).unique_key().not_null())
                    .col(string_len(Participant::Event, 255).not_null())
                    .col(integer(Participant::Age).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Participant::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Participant {
    Table,
    Id,
    Name,
    Email,
    Event,
    Age,
}
