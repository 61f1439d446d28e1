use async_trait::async_trait;
use gympass_application::ports::GymRepository;
use gympass_domain::{DomainError, Gym, NewGym};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

use super::page_window;

type GymRow = (String, String, Option<String>, Option<String>, f64, f64);

pub struct SqliteGymRepository {
    pool: SqlitePool,
}

impl SqliteGymRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_gym(row: GymRow) -> Gym {
        let (id, title, description, phone, latitude, longitude) = row;

        Gym {
            id: Arc::from(id.as_str()),
            title: Arc::from(title.as_str()),
            description: description.map(|s| Arc::from(s.as_str())),
            phone: phone.map(|s| Arc::from(s.as_str())),
            latitude,
            longitude,
        }
    }
}

/// Wraps `query` in `%..%` with LIKE wildcards escaped by `\`.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl GymRepository for SqliteGymRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, DomainError> {
        let row = sqlx::query_as::<_, GymRow>(
            "SELECT id, title, description, phone, latitude, longitude
             FROM gyms WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query gym by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_gym))
    }

    #[instrument(skip(self))]
    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>, DomainError> {
        let (limit, offset) = page_window(page);

        let rows = sqlx::query_as::<_, GymRow>(
            "SELECT id, title, description, phone, latitude, longitude
             FROM gyms
             WHERE title LIKE ? ESCAPE '\\'
             ORDER BY rowid
             LIMIT ? OFFSET ?",
        )
        .bind(like_pattern(query))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to search gyms");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_gym).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Gym>, DomainError> {
        let rows = sqlx::query_as::<_, GymRow>(
            "SELECT id, title, description, phone, latitude, longitude
             FROM gyms
             ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all gyms");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_gym).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, gym: NewGym) -> Result<Gym, DomainError> {
        let gym = gym.into_gym(Arc::from(uuid::Uuid::new_v4().to_string().as_str()));

        sqlx::query(
            "INSERT INTO gyms (id, title, description, phone, latitude, longitude)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(gym.id.as_ref())
        .bind(gym.title.as_ref())
        .bind(gym.description.as_deref())
        .bind(gym.phone.as_deref())
        .bind(gym.latitude)
        .bind(gym.longitude)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create gym");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(gym)
    }
}
