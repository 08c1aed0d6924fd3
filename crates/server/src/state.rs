use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::animal::{AnimalService, SeaOrmAnimalRepository};
use service::cabinet::{CabinetService, SeaOrmCabinetRepository};
use service::participant::{ParticipantService, SeaOrmParticipantRepository};
use service::task::{SeaOrmTaskRepository, TaskService};

pub type Cabinets = CabinetService<SeaOrmCabinetRepository>;
pub type Participants = ParticipantService<SeaOrmParticipantRepository>;
pub type Animals = AnimalService<SeaOrmAnimalRepository>;
pub type Tasks = TaskService<SeaOrmTaskRepository>;

/// Shared handler state. Cloning is cheap: the pool and services are
/// reference counted.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cabinets: Arc<Cabinets>,
    pub participants: Arc<Participants>,
    pub animals: Arc<Animals>,
    pub tasks: Arc<Tasks>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            cabinets: Arc::new(CabinetService::new(Arc::new(SeaOrmCabinetRepository::new(db.clone())))),
            participants: Arc::new(ParticipantService::new(Arc::new(SeaOrmParticipantRepository::new(db.clone())))),
            animals: Arc::new(AnimalService::new(Arc::new(SeaOrmAnimalRepository::new(db.clone())))),
            tasks: Arc::new(TaskService::new(Arc::new(SeaOrmTaskRepository::new(db.clone())))),
            db,
        }
    }
}
