use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: Arc<str>,
    pub gym_id: Arc<str>,
    pub user_id: Arc<str>,
    pub validated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Data handed to `CheckInRepository::create`.
///
/// `daily_slot` is the one-per-day uniqueness key produced by
/// [`DailyLimitScope::daily_slot`](crate::DailyLimitScope::daily_slot).
#[derive(Debug, Clone, PartialEq)]
pub struct NewCheckIn {
    pub gym_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub daily_slot: String,
}

/// Sub-second digits kept on stored timestamps.
pub const TIMESTAMP_PRECISION: u16 = 6;

impl NewCheckIn {
    /// The record as storage keeps it: `created_at` is cut to microseconds.
    pub fn into_check_in(self, id: Arc<str>) -> CheckIn {
        CheckIn {
            id,
            gym_id: Arc::from(self.gym_id.as_str()),
            user_id: Arc::from(self.user_id.as_str()),
            validated_at: None,
            created_at: self.created_at.trunc_subsecs(TIMESTAMP_PRECISION),
        }
    }
}
