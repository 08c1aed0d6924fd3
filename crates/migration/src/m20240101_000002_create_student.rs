//! Create `student` table with FK to `cabinet`.
//!
//! Deleting a cabinet removes its students.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_len(Student::FullName, 100).not_null())
                    .col(integer(Student::CabinetId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_cabinet")
                            .from(Student::Table, Student::CabinetId)
                            .to(Cabinet::Table, Cabinet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student {
    Table,
    Id,
    FullName,
    CabinetId,
}

#[derive(DeriveIden)]
enum Cabinet {
    Table,
    Id,
}
