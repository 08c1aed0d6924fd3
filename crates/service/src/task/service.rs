use std::sync::Arc;

use models::task::{self, NewTask};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::task::repository::TaskRepository;

/// Highest task id a lookup may ask for.
pub const MAX_TASK_ID: i64 = 1000;

pub struct TaskService<R: TaskRepository> {
    repo: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewTask) -> Result<task::Model, ServiceError> {
        input.validate()?;
        let created = self.repo.insert(&input).await?;
        info!(id = created.id, "task_created");
        Ok(created)
    }

    /// Ids above [`MAX_TASK_ID`] are refused without touching storage.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<task::Model, ServiceError> {
        if id > MAX_TASK_ID {
            warn!(id, "task_id_out_of_range");
            return Err(ServiceError::OutOfRange(format!("Task id exceeds the allowed maximum ({MAX_TASK_ID})")));
        }
        let id32 = i32::try_from(id).map_err(|_| ServiceError::not_found("task", id))?;
        self.repo.get(id32).await?.ok_or_else(|| ServiceError::not_found("task", id))
    }
}
