use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use gympass_application::ports::CheckInRepository;
use gympass_domain::{CalendarDay, CheckIn, DomainError, NewCheckIn};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

use super::page_window;

type CheckInRow = (String, String, String, Option<String>, String);

const SELECT_COLUMNS: &str = "SELECT id, gym_id, user_id, validated_at, created_at FROM check_ins";

pub struct SqliteCheckInRepository {
    pool: SqlitePool,
}

impl SqliteCheckInRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_check_in(row: CheckInRow) -> Result<CheckIn, DomainError> {
        let (id, gym_id, user_id, validated_at, created_at) = row;

        Ok(CheckIn {
            id: Arc::from(id.as_str()),
            gym_id: Arc::from(gym_id.as_str()),
            user_id: Arc::from(user_id.as_str()),
            validated_at: validated_at.as_deref().map(parse_timestamp).transpose()?,
            created_at: parse_timestamp(&created_at)?,
        })
    }

    fn rows_to_check_ins(rows: Vec<CheckInRow>) -> Result<Vec<CheckIn>, DomainError> {
        rows.into_iter().map(Self::row_to_check_in).collect()
    }
}

/// Fixed-width RFC 3339 in UTC, so text comparison orders like time.
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            error!(error = %e, value, "Invalid timestamp stored in check_ins");
            DomainError::DatabaseError(format!("Invalid timestamp '{}': {}", value, e))
        })
}

#[async_trait]
impl CheckInRepository for SqliteCheckInRepository {
    #[instrument(skip(self))]
    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn, DomainError> {
        let id = uuid::Uuid::new_v4().to_string();
        let daily_slot = check_in.daily_slot.clone();
        let stored = check_in.into_check_in(Arc::from(id.as_str()));

        sqlx::query(
            "INSERT INTO check_ins (id, user_id, gym_id, daily_slot, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(stored.user_id.as_ref())
        .bind(stored.gym_id.as_ref())
        .bind(&daily_slot)
        .bind(format_timestamp(stored.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::CheckInConflict(daily_slot.clone())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                DomainError::ResourceNotFound(format!("Gym {} not found", stored.gym_id))
            }
            _ => {
                error!(error = %e, "Failed to create check-in");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        day: &CalendarDay,
    ) -> Result<Option<CheckIn>, DomainError> {
        let row = sqlx::query_as::<_, CheckInRow>(&format!(
            "{SELECT_COLUMNS}
             WHERE user_id = ? AND created_at >= ? AND created_at < ?
             ORDER BY created_at
             LIMIT 1"
        ))
        .bind(user_id)
        .bind(format_timestamp(day.start))
        .bind(format_timestamp(day.end))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query check-in by user and day");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_check_in).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user_and_gym_on_date(
        &self,
        user_id: &str,
        gym_id: &str,
        day: &CalendarDay,
    ) -> Result<Option<CheckIn>, DomainError> {
        let row = sqlx::query_as::<_, CheckInRow>(&format!(
            "{SELECT_COLUMNS}
             WHERE user_id = ? AND gym_id = ? AND created_at >= ? AND created_at < ?
             ORDER BY created_at
             LIMIT 1"
        ))
        .bind(user_id)
        .bind(gym_id)
        .bind(format_timestamp(day.start))
        .bind(format_timestamp(day.end))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query check-in by user, gym and day");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(Self::row_to_check_in).transpose()
    }

    #[instrument(skip(self))]
    async fn count_by_user_id(&self, user_id: &str) -> Result<u64, DomainError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM check_ins WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count check-ins");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count.0.max(0) as u64)
    }

    #[instrument(skip(self))]
    async fn find_many_by_user_id(
        &self,
        user_id: &str,
        page: u32,
    ) -> Result<Vec<CheckIn>, DomainError> {
        let (limit, offset) = page_window(page);

        let rows = sqlx::query_as::<_, CheckInRow>(&format!(
            "{SELECT_COLUMNS}
             WHERE user_id = ?
             ORDER BY created_at, rowid
             LIMIT ? OFFSET ?"
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query check-ins by user");
            DomainError::DatabaseError(e.to_string())
        })?;

        Self::rows_to_check_ins(rows)
    }
}
