mod check_in;
mod fetch_history;
mod get_metrics;

pub use check_in::{CheckInPolicy, CheckInRequest, CheckInResponse, CheckInUseCase};
pub use fetch_history::{
    FetchUserCheckInsHistoryRequest, FetchUserCheckInsHistoryResponse,
    FetchUserCheckInsHistoryUseCase,
};
pub use get_metrics::{GetUserMetricsRequest, GetUserMetricsResponse, GetUserMetricsUseCase};
