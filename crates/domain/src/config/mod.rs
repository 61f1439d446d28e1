//! Configuration module for Gympass
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `check_in`: Geofence and daily limit policy
//! - `gyms`: Nearby search radius
//! - `logging`: Logging settings
//! - `database`: Database configuration
//! - `errors`: Configuration errors

pub mod check_in;
pub mod database;
pub mod errors;
pub mod gyms;
pub mod logging;
pub mod root;

pub use check_in::CheckInConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use gyms::GymsConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
