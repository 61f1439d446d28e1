use gympass_domain::{Coordinates, DomainError, Gym};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::GymRepository;

#[derive(Debug, Clone, Copy)]
pub struct FetchNearbyGymsRequest {
    pub user_latitude: f64,
    pub user_longitude: f64,
}

#[derive(Debug, Clone)]
pub struct FetchNearbyGymsResponse {
    pub gyms: Vec<Gym>,
}

/// Use case for listing the gyms within a fixed radius of the user.
///
/// Gyms keep the order the repository returned them in.
pub struct FetchNearbyGymsUseCase {
    gym_repo: Arc<dyn GymRepository>,
    radius_km: f64,
}

impl FetchNearbyGymsUseCase {
    pub const DEFAULT_RADIUS_KM: f64 = 10.0;

    pub fn new(gym_repo: Arc<dyn GymRepository>) -> Self {
        Self {
            gym_repo,
            radius_km: Self::DEFAULT_RADIUS_KM,
        }
    }

    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        request: FetchNearbyGymsRequest,
    ) -> Result<FetchNearbyGymsResponse, DomainError> {
        let user_location = Coordinates::new(request.user_latitude, request.user_longitude)?;

        let candidates = self.gym_repo.find_all().await?;
        let total = candidates.len();

        let gyms: Vec<Gym> = candidates
            .into_iter()
            .filter(|gym| user_location.distance_to(&gym.coordinates()) <= self.radius_km)
            .collect();

        debug!(
            total,
            nearby = gyms.len(),
            radius_km = self.radius_km,
            "Filtered gyms by distance"
        );

        Ok(FetchNearbyGymsResponse { gyms })
    }
}
