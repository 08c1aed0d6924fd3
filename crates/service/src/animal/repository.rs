use async_trait::async_trait;
use models::animal::{self, NewAnimal};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;

#[async_trait]
pub trait AnimalRepository: Send + Sync {
    async fn insert(&self, input: &NewAnimal) -> Result<animal::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<animal::Model>, ServiceError>;
    async fn list_all(&self) -> Result<Vec<animal::Model>, ServiceError>;
}

#[derive(Clone)]
pub struct SeaOrmAnimalRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAnimalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnimalRepository for SeaOrmAnimalRepository {
    async fn insert(&self, input: &NewAnimal) -> Result<animal::Model, ServiceError> {
        Ok(animal::create(&self.db, input).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<animal::Model>, ServiceError> {
        Ok(animal::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn list_all(&self) -> Result<Vec<animal::Model>, ServiceError> {
        Ok(animal::Entity::find().order_by_asc(animal::Column::Id).all(&self.db).await?)
    }
}
