use async_trait::async_trait;
use models::participant::{self, NewParticipant};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::ServiceError;

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Insert; a unique violation surfaces as `ServiceError::Conflict`.
    async fn insert(&self, input: &NewParticipant) -> Result<participant::Model, ServiceError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError>;
    async fn list_by_event(&self, event: &str) -> Result<Vec<participant::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmParticipantRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmParticipantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ParticipantRepository for SeaOrmParticipantRepository {
    async fn insert(&self, input: &NewParticipant) -> Result<participant::Model, ServiceError> {
        Ok(participant::create(&self.db, input).await?)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        let found = participant::Entity::find()
            .filter(participant::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(found.is_some())
    }

    async fn list_by_event(&self, event: &str) -> Result<Vec<participant::Model>, ServiceError> {
        let rows = participant::Entity::find()
            .filter(participant::Column::Event.eq(event))
            .order_by_asc(participant::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}
