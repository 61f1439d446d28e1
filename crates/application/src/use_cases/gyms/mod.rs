mod create_gym;
mod fetch_nearby;
mod search_gyms;

pub use create_gym::{CreateGymResponse, CreateGymUseCase};
pub use fetch_nearby::{FetchNearbyGymsRequest, FetchNearbyGymsResponse, FetchNearbyGymsUseCase};
pub use search_gyms::{SearchGymsRequest, SearchGymsResponse, SearchGymsUseCase};
