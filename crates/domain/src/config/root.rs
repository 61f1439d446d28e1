use super::{CheckInConfig, ConfigError, DatabaseConfig, GymsConfig, LoggingConfig};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "gympass.toml";
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub check_in: CheckInConfig,

    #[serde(default)]
    pub gyms: GymsConfig,
}

/// Values given on the command line, applied over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `config_path`, or `./gympass.toml` when present, or defaults.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(p) => Some(p.to_string()),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Some(DEFAULT_CONFIG_FILE.to_string())
            }
            None => None,
        };

        let mut config = match path {
            Some(path) => {
                let contents =
                    std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
                        path: path.clone(),
                        source,
                    })?;
                Self::from_toml(&contents)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.check_in.max_distance_km.is_finite() && self.check_in.max_distance_km > 0.0) {
            return Err(ConfigError::Validation(format!(
                "check_in.max_distance_km must be a positive number, got {}",
                self.check_in.max_distance_km
            )));
        }

        if !(self.gyms.nearby_radius_km.is_finite() && self.gyms.nearby_radius_km > 0.0) {
            return Err(ConfigError::Validation(format!(
                "gyms.nearby_radius_km must be a positive number, got {}",
                self.gyms.nearby_radius_km
            )));
        }

        self.timezone()?;

        if !VALID_LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got '{}'",
                VALID_LOG_LEVELS, self.logging.level
            )));
        }

        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.path cannot be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.check_in.timezone.parse::<Tz>().map_err(|_| {
            ConfigError::Validation(format!(
                "check_in.timezone '{}' is not a known IANA time zone",
                self.check_in.timezone
            ))
        })
    }
}
