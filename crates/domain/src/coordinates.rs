use crate::errors::DomainError;
use crate::geo;
use serde::{Deserialize, Serialize};

/// A point on the globe in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds a point, rejecting values outside [-90, 90] / [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        Self::validate(latitude, longitude).map_err(DomainError::InvalidCoordinates)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn validate(latitude: f64, longitude: f64) -> Result<(), String> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err("Coordinates must be finite numbers".to_string());
        }

        if latitude.abs() > 90.0 {
            return Err(format!(
                "Latitude {} is outside the range [-90, 90]",
                latitude
            ));
        }

        if longitude.abs() > 180.0 {
            return Err(format!(
                "Longitude {} is outside the range [-180, 180]",
                longitude
            ));
        }

        Ok(())
    }

    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        geo::distance_in_km(*self, *other)
    }
}
