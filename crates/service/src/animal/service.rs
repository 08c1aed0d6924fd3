use std::sync::Arc;

use models::animal::{self, NewAnimal};
use tracing::{error, info, instrument};

use crate::animal::repository::AnimalRepository;
use crate::errors::ServiceError;

pub struct AnimalService<R: AnimalRepository> {
    repo: Arc<R>,
}

impl<R: AnimalRepository> AnimalService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewAnimal) -> Result<animal::Model, ServiceError> {
        input.validate()?;
        let created = self.repo.insert(&input).await?;
        info!(id = created.id, "animal_created");
        Ok(created)
    }

    /// Fetch one animal. A stored row with a negative age is reported as
    /// `InconsistentState` instead of being returned.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<animal::Model, ServiceError> {
        let id32 = i32::try_from(id).map_err(|_| ServiceError::not_found("animal", id))?;
        let found = self.repo.get(id32).await?.ok_or_else(|| ServiceError::not_found("animal", id))?;
        if !found.is_consistent() {
            error!(id, age = found.age, "animal_row_inconsistent");
            return Err(ServiceError::InconsistentState(format!("animal {id} has negative age")));
        }
        Ok(found)
    }

    pub async fn list(&self) -> Result<Vec<animal::Model>, ServiceError> {
        self.repo.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::repository::SeaOrmAnimalRepository;
    use crate::test_support::get_db;
    use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

    fn rex(age: i64) -> NewAnimal {
        NewAnimal { name: "Rex".into(), age, adopted: false, health_status: None }
    }

    async fn service() -> anyhow::Result<(DatabaseConnection, AnimalService<SeaOrmAnimalRepository>)> {
        let db = get_db().await?;
        let svc = AnimalService::new(Arc::new(SeaOrmAnimalRepository::new(db.clone())));
        Ok((db, svc))
    }

    #[tokio::test]
    async fn create_then_get_applies_defaults() -> anyhow::Result<()> {
        let (_db, svc) = service().await?;
        let created = svc.create(rex(3)).await?;
        let fetched = svc.get(created.id as i64).await?;
        assert_eq!(fetched, created);
        assert!(!fetched.adopted);
        assert_eq!(fetched.health_status, "healthy");
        Ok(())
    }

    #[tokio::test]
    async fn negative_age_is_rejected_on_create() -> anyhow::Result<()> {
        let (_db, svc) = service().await?;
        match svc.create(rex(-1)).await {
            Err(ServiceError::Validation(v)) => assert!(v.has_field("age")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_and_oversized_ids_are_not_found() -> anyhow::Result<()> {
        let (_db, svc) = service().await?;
        assert!(matches!(svc.get(9).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.get(i64::MAX).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn row_written_around_validation_is_reported_inconsistent() -> anyhow::Result<()> {
        let (db, svc) = service().await?;
        let bad = animal::ActiveModel {
            name: Set("Ghost".into()),
            age: Set(-4),
            adopted: Set(false),
            health_status: Set("unknown".into()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        assert!(matches!(svc.get(bad.id as i64).await, Err(ServiceError::InconsistentState(_))));
        Ok(())
    }
}
