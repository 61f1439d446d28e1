use gympass_application::use_cases::{
    CheckInPolicy, CheckInUseCase, CreateGymUseCase, FetchNearbyGymsUseCase,
    FetchUserCheckInsHistoryUseCase, GetUserMetricsUseCase, SearchGymsUseCase,
};
use gympass_domain::Config;

use super::Repositories;

pub struct UseCases {
    pub check_in: CheckInUseCase,
    pub fetch_nearby_gyms: FetchNearbyGymsUseCase,
    pub search_gyms: SearchGymsUseCase,
    pub create_gym: CreateGymUseCase,
    pub fetch_history: FetchUserCheckInsHistoryUseCase,
    pub get_metrics: GetUserMetricsUseCase,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> anyhow::Result<Self> {
        let policy = CheckInPolicy::from_config(config)?;

        Ok(Self {
            check_in: CheckInUseCase::new(repos.check_in.clone(), repos.gym.clone())
                .with_policy(policy),
            fetch_nearby_gyms: FetchNearbyGymsUseCase::new(repos.gym.clone())
                .with_radius_km(config.gyms.nearby_radius_km),
            search_gyms: SearchGymsUseCase::new(repos.gym.clone()),
            create_gym: CreateGymUseCase::new(repos.gym.clone()),
            fetch_history: FetchUserCheckInsHistoryUseCase::new(repos.check_in.clone()),
            get_metrics: GetUserMetricsUseCase::new(repos.check_in.clone()),
        })
    }
}
