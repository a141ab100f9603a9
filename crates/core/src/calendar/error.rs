//! Calendar error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Calendar-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Start date is after end date.
    #[error("Invalid date range: start {start} is after end {end}")]
    StartAfterEnd {
        /// Requested start.
        start: NaiveDate,
        /// Requested end.
        end: NaiveDate,
    },

    /// Range spans more days than allowed.
    #[error("Invalid date range: {days} days exceeds the maximum of {max} days")]
    TooLong {
        /// Inclusive day count requested.
        days: i64,
        /// Maximum inclusive day count.
        max: i64,
    },
}

impl From<CalendarError> for cashcast_shared::AppError {
    fn from(err: CalendarError) -> Self {
        Self::Validation(err.to_string())
    }
}
