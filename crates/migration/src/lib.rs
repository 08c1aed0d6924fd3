//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_cabinet;
mod m20240101_000002_create_student;
mod m20240101_000003_create_participant;
mod m20240101_000004_create_animal;
mod m20240101_000005_create_task;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_cabinet::Migration),
            // student references cabinet
            Box::new(m20240101_000002_create_student::Migration),
            Box::new(m20240101_000003_create_participant::Migration),
            Box::new(m20240101_000004_create_animal::Migration),
            Box::new(m20240101_000005_create_task::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
