use std::sync::Arc;

use models::participant::{self, NewParticipant};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::participant::repository::ParticipantRepository;

pub const EMAIL_TAKEN: &str = "Email already registered";

pub struct ParticipantService<R: ParticipantRepository> {
    repo: Arc<R>,
}

impl<R: ParticipantRepository> ParticipantService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Register a participant. The email is checked after normalization, so
    /// `A@X.COM` and `A@x.com` count as the same address.
    #[instrument(skip(self, input), fields(event = %input.event))]
    pub async fn create(&self, input: NewParticipant) -> Result<participant::Model, ServiceError> {
        input.validate()?;
        let input = input.normalized();

        if self.repo.exists_by_email(&input.email).await? {
            warn!("participant_create_rejected_duplicate_email");
            return Err(ServiceError::Conflict(EMAIL_TAKEN.to_string()));
        }
        match self.repo.insert(&input).await {
            Ok(created) => {
                info!(id = created.id, "participant_created");
                Ok(created)
            }
            Err(ServiceError::Conflict(_)) => {
                warn!("participant_create_rejected_by_constraint");
                Err(ServiceError::Conflict(EMAIL_TAKEN.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    /// Participants of one event; an unknown event yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_by_event(&self, event: &str) -> Result<Vec<participant::Model>, ServiceError> {
        self.repo.list_by_event(event.trim()).await
    }
}
