//! Event participants; one registration per email.

pub mod repository;
pub mod service;

pub use repository::{ParticipantRepository, SeaOrmParticipantRepository};
pub use service::{ParticipantService, EMAIL_TAKEN};
