use gympass_domain::{DomainError, Gym};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::GymRepository;

#[derive(Debug, Clone)]
pub struct SearchGymsRequest {
    pub query: String,
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct SearchGymsResponse {
    pub gyms: Vec<Gym>,
}

pub struct SearchGymsUseCase {
    gym_repo: Arc<dyn GymRepository>,
}

impl SearchGymsUseCase {
    pub fn new(gym_repo: Arc<dyn GymRepository>) -> Self {
        Self { gym_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, request: SearchGymsRequest) -> Result<SearchGymsResponse, DomainError> {
        if request.page == 0 {
            return Err(DomainError::InvalidPage(request.page));
        }

        let gyms = self
            .gym_repo
            .search_many(request.query.trim(), request.page)
            .await?;

        Ok(SearchGymsResponse { gyms })
    }
}
