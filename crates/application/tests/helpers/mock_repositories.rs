#![allow(dead_code)]

use async_trait::async_trait;
use gympass_application::ports::{CheckInRepository, GymRepository};
use gympass_domain::{CalendarDay, CheckIn, DomainError, Gym, NewCheckIn, NewGym, PAGE_SIZE};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

fn page_bounds(page: u32, len: usize) -> (usize, usize) {
    let start = (page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE as usize);
    let start = start.min(len);
    let end = start.saturating_add(PAGE_SIZE as usize).min(len);
    (start, end)
}

// ============================================================================
// Mock GymRepository
// ============================================================================

#[derive(Clone)]
pub struct MockGymRepository {
    gyms: Arc<RwLock<Vec<Gym>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockGymRepository {
    pub fn new() -> Self {
        Self {
            gyms: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Creates a mock pre-populated with gyms whose ids are chosen by the test
    pub async fn with_gyms(gyms: Vec<Gym>) -> Self {
        let repo = Self::new();
        repo.gyms.write().await.extend(gyms);
        repo
    }

    pub async fn push(&self, gym: Gym) {
        self.gyms.write().await.push(gym);
    }

    pub async fn count(&self) -> usize {
        self.gyms.read().await.len()
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock gym repository failed".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MockGymRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GymRepository for MockGymRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, DomainError> {
        self.check_failure().await?;
        Ok(self
            .gyms
            .read()
            .await
            .iter()
            .find(|g| g.id.as_ref() == id)
            .cloned())
    }

    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>, DomainError> {
        self.check_failure().await?;
        let needle = query.to_ascii_lowercase();
        let matches: Vec<Gym> = self
            .gyms
            .read()
            .await
            .iter()
            .filter(|g| g.title.to_ascii_lowercase().contains(&needle))
            .cloned()
            .collect();

        let (start, end) = page_bounds(page, matches.len());
        Ok(matches[start..end].to_vec())
    }

    async fn find_all(&self) -> Result<Vec<Gym>, DomainError> {
        self.check_failure().await?;
        Ok(self.gyms.read().await.clone())
    }

    async fn create(&self, gym: NewGym) -> Result<Gym, DomainError> {
        self.check_failure().await?;
        let gym = gym.into_gym(Arc::from(uuid::Uuid::new_v4().to_string().as_str()));
        self.gyms.write().await.push(gym.clone());
        Ok(gym)
    }
}

// ============================================================================
// Mock CheckInRepository
// ============================================================================

#[derive(Clone)]
pub struct MockCheckInRepository {
    check_ins: Arc<RwLock<Vec<(CheckIn, String)>>>,
    hide_existing: Arc<RwLock<bool>>,
    create_calls: Arc<AtomicU64>,
}

impl MockCheckInRepository {
    pub fn new() -> Self {
        Self {
            check_ins: Arc::new(RwLock::new(Vec::new())),
            hide_existing: Arc::new(RwLock::new(false)),
            create_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Makes the day lookups miss, as if a concurrent request inserted its
    /// row between this request's lookup and its insert.
    pub async fn set_hide_existing(&self, hide: bool) {
        *self.hide_existing.write().await = hide;
    }

    pub async fn count(&self) -> usize {
        self.check_ins.read().await.len()
    }

    pub async fn get_all(&self) -> Vec<CheckIn> {
        self.check_ins
            .read()
            .await
            .iter()
            .map(|(c, _)| c.clone())
            .collect()
    }

    pub fn create_calls(&self) -> u64 {
        self.create_calls.load(Ordering::Relaxed)
    }
}

impl Default for MockCheckInRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckInRepository for MockCheckInRepository {
    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn, DomainError> {
        self.create_calls.fetch_add(1, Ordering::Relaxed);
        let mut check_ins = self.check_ins.write().await;

        if check_ins.iter().any(|(_, slot)| *slot == check_in.daily_slot) {
            return Err(DomainError::CheckInConflict(check_in.daily_slot));
        }

        let slot = check_in.daily_slot.clone();
        let stored = check_in.into_check_in(Arc::from(uuid::Uuid::new_v4().to_string().as_str()));
        check_ins.push((stored.clone(), slot));
        Ok(stored)
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        day: &CalendarDay,
    ) -> Result<Option<CheckIn>, DomainError> {
        if *self.hide_existing.read().await {
            return Ok(None);
        }
        Ok(self
            .check_ins
            .read()
            .await
            .iter()
            .map(|(c, _)| c)
            .find(|c| c.user_id.as_ref() == user_id && day.contains(c.created_at))
            .cloned())
    }

    async fn find_by_user_and_gym_on_date(
        &self,
        user_id: &str,
        gym_id: &str,
        day: &CalendarDay,
    ) -> Result<Option<CheckIn>, DomainError> {
        if *self.hide_existing.read().await {
            return Ok(None);
        }
        Ok(self
            .check_ins
            .read()
            .await
            .iter()
            .map(|(c, _)| c)
            .find(|c| {
                c.user_id.as_ref() == user_id
                    && c.gym_id.as_ref() == gym_id
                    && day.contains(c.created_at)
            })
            .cloned())
    }

    async fn count_by_user_id(&self, user_id: &str) -> Result<u64, DomainError> {
        Ok(self
            .check_ins
            .read()
            .await
            .iter()
            .filter(|(c, _)| c.user_id.as_ref() == user_id)
            .count() as u64)
    }

    async fn find_many_by_user_id(
        &self,
        user_id: &str,
        page: u32,
    ) -> Result<Vec<CheckIn>, DomainError> {
        let mut check_ins: Vec<CheckIn> = self
            .check_ins
            .read()
            .await
            .iter()
            .map(|(c, _)| c)
            .filter(|c| c.user_id.as_ref() == user_id)
            .cloned()
            .collect();
        check_ins.sort_by_key(|c| c.created_at);

        let (start, end) = page_bounds(page, check_ins.len());
        Ok(check_ins[start..end].to_vec())
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn make_gym(id: &str, title: &str, latitude: f64, longitude: f64) -> Gym {
    Gym {
        id: Arc::from(id),
        title: Arc::from(title),
        description: None,
        phone: None,
        latitude,
        longitude,
    }
}
