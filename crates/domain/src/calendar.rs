use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The local calendar day containing some instant, as a half-open UTC
/// interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarDay {
    pub fn containing(instant: DateTime<Utc>, tz: Tz) -> Self {
        let date = instant.with_timezone(&tz).date_naive();
        let next = date.succ_opt().unwrap_or(date);

        Self {
            date,
            start: local_midnight(date, tz),
            end: local_midnight(next, tz),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// First instant of `date` in `tz`. When midnight falls into a DST gap the
/// day starts at the first local time that exists.
fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let mut local = date.and_hms_opt(0, 0, 0).unwrap_or_default();

    for _ in 0..4 {
        match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => return dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            LocalResult::None => local += Duration::minutes(30),
        }
    }

    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

/// Which check-ins count against the one-per-day limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyLimitScope {
    /// One check-in per user per day, whatever the gym.
    #[default]
    PerUser,
    /// One check-in per user per gym per day.
    PerUserAndGym,
}

impl DailyLimitScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            DailyLimitScope::PerUser => "per_user",
            DailyLimitScope::PerUserAndGym => "per_user_and_gym",
        }
    }

    /// Key that is unique among the check-ins allowed to coexist. Storage
    /// enforces it with a unique index.
    ///
    /// Tagged with the scope and the user id length, so ids containing `:`
    /// never collide across users or scopes.
    pub fn daily_slot(&self, user_id: &str, gym_id: &str, day: &CalendarDay) -> String {
        match self {
            DailyLimitScope::PerUser => format!(
                "{}:{}:{}:{}",
                self.as_str(),
                user_id.len(),
                user_id,
                day.date
            ),
            DailyLimitScope::PerUserAndGym => format!(
                "{}:{}:{}:{}:{}",
                self.as_str(),
                user_id.len(),
                user_id,
                gym_id,
                day.date
            ),
        }
    }
}

impl fmt::Display for DailyLimitScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DailyLimitScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per_user" => Ok(DailyLimitScope::PerUser),
            "per_user_and_gym" => Ok(DailyLimitScope::PerUserAndGym),
            other => Err(format!(
                "Unknown daily limit scope '{}' (expected per_user or per_user_and_gym)",
                other
            )),
        }
    }
}
