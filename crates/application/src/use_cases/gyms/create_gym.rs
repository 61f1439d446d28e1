use gympass_domain::{DomainError, Gym, NewGym};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::GymRepository;

#[derive(Debug, Clone)]
pub struct CreateGymResponse {
    pub gym: Gym,
}

pub struct CreateGymUseCase {
    gym_repo: Arc<dyn GymRepository>,
}

impl CreateGymUseCase {
    pub fn new(gym_repo: Arc<dyn GymRepository>) -> Self {
        Self { gym_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, gym: NewGym) -> Result<CreateGymResponse, DomainError> {
        gym.validate_title().map_err(DomainError::InvalidGymTitle)?;
        gym.validate_description()
            .map_err(DomainError::InvalidGymDescription)?;
        gym.validate_coordinates()
            .map_err(DomainError::InvalidCoordinates)?;

        let gym = self.gym_repo.create(gym).await?;

        info!(
            gym_id = %gym.id,
            title = %gym.title,
            "Gym created successfully"
        );

        Ok(CreateGymResponse { gym })
    }
}
