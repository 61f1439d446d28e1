use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Max distance reached: {distance_km:.3} km is farther than the allowed {max_distance_km} km")]
    MaxDistance {
        distance_km: f64,
        max_distance_km: f64,
    },

    #[error("Max number of check-ins reached for the current day")]
    MaxNumberOfCheckIns,

    #[error("Check-in conflict: {0}")]
    CheckInConflict(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid page: {0} (pages start at 1)")]
    InvalidPage(u32),

    #[error("Invalid gym title: {0}")]
    InvalidGymTitle(String),

    #[error("Invalid gym description: {0}")]
    InvalidGymDescription(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Coarse classification a transport layer maps onto its own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Forbidden,
    Conflict,
    InvalidInput,
    Internal,
}

impl DomainError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DomainError::ResourceNotFound(_) => ErrorCategory::NotFound,
            DomainError::MaxDistance { .. } => ErrorCategory::Forbidden,
            DomainError::MaxNumberOfCheckIns | DomainError::CheckInConflict(_) => {
                ErrorCategory::Conflict
            }
            DomainError::InvalidCoordinates(_)
            | DomainError::InvalidPage(_)
            | DomainError::InvalidGymTitle(_)
            | DomainError::InvalidGymDescription(_) => ErrorCategory::InvalidInput,
            DomainError::DatabaseError(_) => ErrorCategory::Internal,
        }
    }

    /// Business-rule rejections, as opposed to storage failures.
    pub fn is_rejection(&self) -> bool {
        !matches!(self.category(), ErrorCategory::Internal)
    }
}
