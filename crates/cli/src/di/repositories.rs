use gympass_application::ports::{CheckInRepository, GymRepository};
use gympass_infrastructure::repositories::{SqliteCheckInRepository, SqliteGymRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub gym: Arc<dyn GymRepository>,
    pub check_in: Arc<dyn CheckInRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            gym: Arc::new(SqliteGymRepository::new(pool.clone())),
            check_in: Arc::new(SqliteCheckInRepository::new(pool)),
        }
    }
}
