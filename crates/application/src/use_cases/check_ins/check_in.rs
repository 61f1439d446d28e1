use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use gympass_domain::{
    CalendarDay, CheckIn, Config, ConfigError, Coordinates, DailyLimitScope, DomainError,
    NewCheckIn,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{CheckInRepository, GymRepository};

/// Rules a check-in must satisfy besides referencing an existing gym.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckInPolicy {
    /// Geofence radius in kilometers.
    pub max_distance_km: f64,
    pub daily_limit_scope: DailyLimitScope,
    /// Time zone whose calendar decides what "today" is.
    pub timezone: Tz,
}

impl CheckInPolicy {
    pub const DEFAULT_MAX_DISTANCE_KM: f64 = 0.1;

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            max_distance_km: config.check_in.max_distance_km,
            daily_limit_scope: config.check_in.daily_limit_scope,
            timezone: config.timezone()?,
        })
    }
}

impl Default for CheckInPolicy {
    fn default() -> Self {
        Self {
            max_distance_km: Self::DEFAULT_MAX_DISTANCE_KM,
            daily_limit_scope: DailyLimitScope::default(),
            timezone: Tz::UTC,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckInRequest {
    pub gym_id: String,
    pub user_id: String,
    pub user_latitude: f64,
    pub user_longitude: f64,
    /// The single clock reading used for every time decision of the request.
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CheckInResponse {
    pub check_in: CheckIn,
}

/// Use case for checking a user in at a gym.
///
/// Steps short-circuit in order: gym lookup, geofence, daily limit, insert.
/// Nothing is written unless every check passes.
pub struct CheckInUseCase {
    check_in_repo: Arc<dyn CheckInRepository>,
    gym_repo: Arc<dyn GymRepository>,
    policy: CheckInPolicy,
}

impl CheckInUseCase {
    pub fn new(
        check_in_repo: Arc<dyn CheckInRepository>,
        gym_repo: Arc<dyn GymRepository>,
    ) -> Self {
        Self {
            check_in_repo,
            gym_repo,
            policy: CheckInPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CheckInPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &CheckInPolicy {
        &self.policy
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, request: CheckInRequest) -> Result<CheckInResponse, DomainError> {
        let user_location = Coordinates::new(request.user_latitude, request.user_longitude)?;

        let gym = self
            .gym_repo
            .find_by_id(&request.gym_id)
            .await?
            .ok_or_else(|| {
                DomainError::ResourceNotFound(format!("Gym {} not found", request.gym_id))
            })?;

        let distance_km = user_location.distance_to(&gym.coordinates());
        if distance_km > self.policy.max_distance_km {
            warn!(
                gym_id = %gym.id,
                user_id = %request.user_id,
                distance_km,
                max_distance_km = self.policy.max_distance_km,
                "Check-in rejected: user outside geofence"
            );
            return Err(DomainError::MaxDistance {
                distance_km,
                max_distance_km: self.policy.max_distance_km,
            });
        }

        let day = CalendarDay::containing(request.now, self.policy.timezone);
        let existing = match self.policy.daily_limit_scope {
            DailyLimitScope::PerUser => {
                self.check_in_repo
                    .find_by_user_id_on_date(&request.user_id, &day)
                    .await?
            }
            DailyLimitScope::PerUserAndGym => {
                self.check_in_repo
                    .find_by_user_and_gym_on_date(&request.user_id, &request.gym_id, &day)
                    .await?
            }
        };

        if let Some(previous) = existing {
            info!(
                user_id = %request.user_id,
                previous_check_in = %previous.id,
                day = %day.date,
                scope = %self.policy.daily_limit_scope,
                "Check-in rejected: daily limit reached"
            );
            return Err(DomainError::MaxNumberOfCheckIns);
        }

        let daily_slot =
            self.policy
                .daily_limit_scope
                .daily_slot(&request.user_id, &request.gym_id, &day);

        let check_in = self
            .check_in_repo
            .create(NewCheckIn {
                gym_id: request.gym_id,
                user_id: request.user_id,
                created_at: request.now,
                daily_slot,
            })
            .await
            .map_err(|e| match e {
                DomainError::CheckInConflict(slot) => {
                    warn!(daily_slot = %slot, "Concurrent check-in lost the race");
                    DomainError::MaxNumberOfCheckIns
                }
                other => other,
            })?;

        info!(
            check_in_id = %check_in.id,
            gym_id = %check_in.gym_id,
            user_id = %check_in.user_id,
            distance_km,
            "Check-in created successfully"
        );

        Ok(CheckInResponse { check_in })
    }
}
