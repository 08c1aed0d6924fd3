use async_trait::async_trait;
use models::task::{self, NewTask};
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::ServiceError;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn insert(&self, input: &NewTask) -> Result<task::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<task::Model>, ServiceError>;
}

#[derive(Clone)]
pub struct SeaOrmTaskRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for SeaOrmTaskRepository {
    async fn insert(&self, input: &NewTask) -> Result<task::Model, ServiceError> {
        Ok(task::create(&self.db, input).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<task::Model>, ServiceError> {
        Ok(task::Entity::find_by_id(id).one(&self.db).await?)
    }
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockTaskRepository {
        tasks: Mutex<Vec<task::Model>>,
        gets: AtomicUsize, // number of get() calls
    }

    impl MockTaskRepository {
        pub fn get_calls(&self) -> usize {
            self.gets.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TaskRepository for MockTaskRepository {
        async fn insert(&self, input: &NewTask) -> Result<task::Model, ServiceError> {
            let mut tasks = self.tasks.lock().unwrap();
            let t = task::Model { id: tasks.len() as i32 + 1, title: input.title.clone(), description: input.description.clone() };
            tasks.push(t.clone());
            Ok(t)
        }

        async fn get(&self, id: i32) -> Result<Option<task::Model>, ServiceError> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            let tasks = self.tasks.lock().unwrap();
            Ok(tasks.iter().find(|t| t.id == id).cloned())
        }
    }
}
