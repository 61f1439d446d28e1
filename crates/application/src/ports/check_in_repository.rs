use async_trait::async_trait;
use gympass_domain::{CalendarDay, CheckIn, DomainError, NewCheckIn};

/// Repository interface for check-ins.
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Persists a new check-in with a freshly generated ID.
    ///
    /// # Errors
    ///
    /// * `DomainError::CheckInConflict` - If a check-in with the same
    ///   `daily_slot` already exists
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn, DomainError>;

    /// Finds a check-in by `user_id` created inside `day`, at any gym.
    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        day: &CalendarDay,
    ) -> Result<Option<CheckIn>, DomainError>;

    /// Finds a check-in by `user_id` at `gym_id` created inside `day`.
    async fn find_by_user_and_gym_on_date(
        &self,
        user_id: &str,
        gym_id: &str,
        day: &CalendarDay,
    ) -> Result<Option<CheckIn>, DomainError>;

    /// Counts every check-in made by `user_id`.
    async fn count_by_user_id(&self, user_id: &str) -> Result<u64, DomainError>;

    /// Check-ins by `user_id`, oldest first, 1-based pages of
    /// [`PAGE_SIZE`](gympass_domain::PAGE_SIZE).
    async fn find_many_by_user_id(
        &self,
        user_id: &str,
        page: u32,
    ) -> Result<Vec<CheckIn>, DomainError>;
}
