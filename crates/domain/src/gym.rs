use crate::coordinates::Coordinates;
use crate::validators::{validate_description, validate_title};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gym {
    pub id: Arc<str>,
    pub title: Arc<str>,
    pub description: Option<Arc<str>>,
    pub phone: Option<Arc<str>>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Gym {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Data required to register a gym; the repository assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGym {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewGym {
    pub fn new(title: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            title: title.into(),
            description: None,
            phone: None,
            latitude,
            longitude,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn validate_title(&self) -> Result<(), String> {
        validate_title(&self.title)
    }

    pub fn validate_description(&self) -> Result<(), String> {
        validate_description(&self.description)
    }

    pub fn validate_coordinates(&self) -> Result<(), String> {
        Coordinates::validate(self.latitude, self.longitude)
    }

    /// Builds the stored record once an id has been assigned.
    pub fn into_gym(self, id: Arc<str>) -> Gym {
        Gym {
            id,
            title: Arc::from(self.title.trim()),
            description: self.description.map(|d| Arc::from(d.as_str())),
            phone: self.phone.map(|p| Arc::from(p.as_str())),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
