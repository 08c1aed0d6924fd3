//! Cabinets and the students seated in them.

pub mod repository;
pub mod service;

pub use repository::{CabinetRepository, SeaOrmCabinetRepository};
pub use service::{CabinetService, CabinetWithStudents, StudentWithCabinet};
