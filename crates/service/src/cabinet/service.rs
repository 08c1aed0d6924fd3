use std::collections::HashMap;
use std::sync::Arc;

use common::pagination::Page;
use models::cabinet::{self, NewCabinet};
use models::student::{self, NewStudent};
use tracing::{info, instrument, warn};

use crate::cabinet::repository::CabinetRepository;
use crate::errors::ServiceError;

/// A cabinet and, when requested, its students.
#[derive(Clone, Debug, PartialEq)]
pub struct CabinetWithStudents {
    pub cabinet: cabinet::Model,
    /// `None` when students were not requested.
    pub students: Option<Vec<student::Model>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentWithCabinet {
    pub student: student::Model,
    pub cabinet: cabinet::Model,
}

/// Cabinet/student business rules: uniqueness of cabinet name and number,
/// cabinet resolution for new students, explicit eager loading.
pub struct CabinetService<R: CabinetRepository> {
    repo: Arc<R>,
}

impl<R: CabinetRepository> CabinetService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, input), fields(name = %input.name, number = input.number))]
    pub async fn create(&self, input: NewCabinet) -> Result<cabinet::Model, ServiceError> {
        input.validate()?;
        let conflict = || ServiceError::Conflict(format!(
            "Cabinet with name '{}' or number {} already exists",
            input.name, input.number
        ));

        // number is within 1..=100 after validation
        if self.repo.exists_by_unique(&input.name, input.number as i32).await? {
            warn!("cabinet_create_rejected_duplicate");
            return Err(conflict());
        }
        match self.repo.insert(&input).await {
            Ok(created) => {
                info!(id = created.id, "cabinet_created");
                Ok(created)
            }
            // lost a race after the pre-check
            Err(ServiceError::Conflict(_)) => {
                warn!("cabinet_create_rejected_by_constraint");
                Err(conflict())
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: Page, include_students: bool) -> Result<Vec<CabinetWithStudents>, ServiceError> {
        let cabinets = self.repo.list(page).await?;
        if !include_students {
            return Ok(cabinets.into_iter().map(|cabinet| CabinetWithStudents { cabinet, students: None }).collect());
        }

        let ids: Vec<i32> = cabinets.iter().map(|c| c.id).collect();
        let mut by_cabinet: HashMap<i32, Vec<student::Model>> = HashMap::new();
        for s in self.repo.students_of(&ids).await? {
            by_cabinet.entry(s.cabinet_id).or_default().push(s);
        }
        Ok(cabinets
            .into_iter()
            .map(|cabinet| {
                let students = by_cabinet.remove(&cabinet.id).unwrap_or_default();
                CabinetWithStudents { cabinet, students: Some(students) }
            })
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<CabinetWithStudents, ServiceError> {
        let id32 = i32::try_from(id).map_err(|_| ServiceError::not_found("cabinet", id))?;
        let cabinet = self.repo.get(id32).await?.ok_or_else(|| ServiceError::not_found("cabinet", id))?;
        let students = self.repo.students_of(&[cabinet.id]).await?;
        Ok(CabinetWithStudents { cabinet, students: Some(students) })
    }

    /// Removes the cabinet; its students go with it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let id32 = i32::try_from(id).map_err(|_| ServiceError::not_found("cabinet", id))?;
        if !self.repo.delete(id32).await? {
            return Err(ServiceError::not_found("cabinet", id));
        }
        info!(id, "cabinet_deleted");
        Ok(())
    }

    #[instrument(skip(self, input), fields(full_name = %input.full_name))]
    pub async fn create_student(&self, input: NewStudent) -> Result<StudentWithCabinet, ServiceError> {
        let cabinet_ref = input.validate()?;
        let (student, cabinet) = self.repo.insert_student(&input.full_name, &cabinet_ref).await?;
        info!(id = student.id, cabinet_id = cabinet.id, "student_created");
        Ok(StudentWithCabinet { student, cabinet })
    }
}
