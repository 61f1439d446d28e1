use gympass_domain::{CheckIn, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::CheckInRepository;

#[derive(Debug, Clone)]
pub struct FetchUserCheckInsHistoryRequest {
    pub user_id: String,
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct FetchUserCheckInsHistoryResponse {
    pub check_ins: Vec<CheckIn>,
}

/// Pages through a user's check-ins, oldest first.
pub struct FetchUserCheckInsHistoryUseCase {
    check_in_repo: Arc<dyn CheckInRepository>,
}

impl FetchUserCheckInsHistoryUseCase {
    pub fn new(check_in_repo: Arc<dyn CheckInRepository>) -> Self {
        Self { check_in_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        request: FetchUserCheckInsHistoryRequest,
    ) -> Result<FetchUserCheckInsHistoryResponse, DomainError> {
        if request.page == 0 {
            return Err(DomainError::InvalidPage(request.page));
        }

        let check_ins = self
            .check_in_repo
            .find_many_by_user_id(&request.user_id, request.page)
            .await?;

        Ok(FetchUserCheckInsHistoryResponse { check_ins })
    }
}
