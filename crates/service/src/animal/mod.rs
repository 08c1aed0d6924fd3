pub mod repository;
pub mod service;

pub use repository::{AnimalRepository, SeaOrmAnimalRepository};
pub use service::AnimalService;
