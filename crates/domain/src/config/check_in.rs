use crate::calendar::DailyLimitScope;
use serde::{Deserialize, Serialize};

/// Check-in eligibility rules
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckInConfig {
    /// Geofence radius around a gym in kilometers (default: 0.1)
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,

    /// Whether the one-per-day limit applies per user or per user and gym
    /// (default: "per_user")
    #[serde(default)]
    pub daily_limit_scope: DailyLimitScope,

    /// IANA time zone whose calendar defines "the same day" (default: "UTC")
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for CheckInConfig {
    fn default() -> Self {
        Self {
            max_distance_km: default_max_distance_km(),
            daily_limit_scope: DailyLimitScope::default(),
            timezone: default_timezone(),
        }
    }
}

fn default_max_distance_km() -> f64 {
    0.1
}

fn default_timezone() -> String {
    "UTC".to_string()
}
