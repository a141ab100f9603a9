//! Forecast error types.

use cashcast_shared::AppError;
use thiserror::Error;

use crate::calendar::CalendarError;

/// Forecast-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// Requested date range is invalid.
    #[error(transparent)]
    InvalidRange(#[from] CalendarError),

    /// Hotel configuration fails validation.
    #[error("Invalid hotel configuration: {0}")]
    InvalidConfig(String),

    /// An amount left the representable decimal range.
    #[error("Projected {0} exceeds the supported amount range")]
    Overflow(&'static str),
}

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::InvalidRange(_) | ForecastError::Overflow(_) => {
                Self::Validation(err.to_string())
            }
            ForecastError::InvalidConfig(_) => Self::Configuration(err.to_string()),
        }
    }
}
