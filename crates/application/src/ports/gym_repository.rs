use async_trait::async_trait;
use gympass_domain::{DomainError, Gym, NewGym};

/// Repository interface for gyms.
///
/// The check-in rules only ever read gyms through this trait. In-memory and
/// persistent implementations must agree on every operation, including the
/// ordering of paged results.
#[async_trait]
pub trait GymRepository: Send + Sync {
    /// Retrieves a gym by its ID.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Gym))` - If the gym exists
    /// * `Ok(None)` - If no gym with this ID exists
    /// * `Err(DomainError)` - If retrieval fails
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, DomainError>;

    /// Case-insensitive substring search over gym titles.
    ///
    /// # Arguments
    ///
    /// * `query` - Text to look for; `%` and `_` match literally
    /// * `page` - 1-based page number, [`PAGE_SIZE`](gympass_domain::PAGE_SIZE) gyms per page
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Gym>)` - Matching gyms in insertion order, possibly empty
    /// * `Err(DomainError)` - If retrieval fails
    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>, DomainError>;

    /// Retrieves every gym in insertion order.
    async fn find_all(&self) -> Result<Vec<Gym>, DomainError>;

    /// Persists a new gym.
    ///
    /// # Returns
    ///
    /// * `Ok(Gym)` - The stored gym with its generated ID
    /// * `Err(DomainError)` - If creation fails
    async fn create(&self, gym: NewGym) -> Result<Gym, DomainError>;
}
