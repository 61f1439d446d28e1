pub mod check_ins;
pub mod gyms;

// Re-export use cases
pub use check_ins::{
    CheckInPolicy, CheckInRequest, CheckInResponse, CheckInUseCase,
    FetchUserCheckInsHistoryRequest, FetchUserCheckInsHistoryResponse,
    FetchUserCheckInsHistoryUseCase, GetUserMetricsRequest, GetUserMetricsResponse,
    GetUserMetricsUseCase,
};
pub use gyms::{
    CreateGymResponse, CreateGymUseCase, FetchNearbyGymsRequest, FetchNearbyGymsResponse,
    FetchNearbyGymsUseCase, SearchGymsRequest, SearchGymsResponse, SearchGymsUseCase,
};
