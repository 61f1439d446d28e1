use gympass_domain::DomainError;
use std::sync::Arc;
use tracing::instrument;

use crate::ports::CheckInRepository;

#[derive(Debug, Clone)]
pub struct GetUserMetricsRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserMetricsResponse {
    pub check_ins_count: u64,
}

pub struct GetUserMetricsUseCase {
    check_in_repo: Arc<dyn CheckInRepository>,
}

impl GetUserMetricsUseCase {
    pub fn new(check_in_repo: Arc<dyn CheckInRepository>) -> Self {
        Self { check_in_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        request: GetUserMetricsRequest,
    ) -> Result<GetUserMetricsResponse, DomainError> {
        let check_ins_count = self.check_in_repo.count_by_user_id(&request.user_id).await?;

        Ok(GetUserMetricsResponse { check_ins_count })
    }
}
