use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GymsConfig {
    /// Radius used by the nearby gyms listing, in kilometers (default: 10)
    #[serde(default = "default_nearby_radius_km")]
    pub nearby_radius_km: f64,
}

impl Default for GymsConfig {
    fn default() -> Self {
        Self {
            nearby_radius_km: default_nearby_radius_km(),
        }
    }
}

fn default_nearby_radius_km() -> f64 {
    10.0
}
