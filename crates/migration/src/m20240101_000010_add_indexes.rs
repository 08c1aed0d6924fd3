use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Student: index on cabinet_id for the eager students query
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_cabinet")
                    .table(Student::Table)
                    .col(Student::CabinetId)
                    .to_owned(),
            )
            .await?;

        // Participant: lookups by event name
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_participant_event")
                    .table(Participant::Table)
                    .col(Participant::Event)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_participant_event").table(Participant::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_student_cabinet").table(Student::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Student {
    Table,
    CabinetId,
}

#[derive(DeriveIden)]
enum Participant {
    Table,
    Event,
}
