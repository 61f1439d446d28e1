//! Gympass Domain Layer
pub mod calendar;
pub mod check_in;
pub mod config;
pub mod coordinates;
pub mod errors;
pub mod geo;
pub mod gym;
pub mod validators;

pub use calendar::{CalendarDay, DailyLimitScope};
pub use check_in::{CheckIn, NewCheckIn};
pub use config::{CliOverrides, Config, ConfigError};
pub use coordinates::Coordinates;
pub use errors::{DomainError, ErrorCategory};
pub use gym::{Gym, NewGym};

/// Number of records returned per page by every paginated repository query.
pub const PAGE_SIZE: u32 = 20;
