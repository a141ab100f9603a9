//! Pricing error types.

use cashcast_shared::AppError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::market::SourceError;
use crate::calendar::CalendarError;

/// Pricing-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Requested date range is invalid.
    #[error(transparent)]
    InvalidRange(#[from] CalendarError),

    /// Occupancy estimate outside `[0, 1]`.
    #[error("Occupancy must be between 0 and 1, got {0}")]
    InvalidOccupancy(Decimal),

    /// Competitor rate override is not positive or too large to cap.
    #[error("Competitor rate must be positive and within the supported range, got {0}")]
    InvalidCompetitorRate(Decimal),

    /// Rate plan code is blank.
    #[error("Rate code must not be blank, got '{0}'")]
    InvalidRateCode(String),

    /// Market data source failed.
    #[error(transparent)]
    SourceUnavailable(#[from] SourceError),

    /// Market source returned no competitor rates for the date.
    #[error("No competitor rates available for {0}")]
    NoCompetitorData(NaiveDate),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::SourceUnavailable(_) | PricingError::NoCompetitorData(_) => {
                Self::ExternalService(err.to_string())
            }
            _ => Self::Validation(err.to_string()),
        }
    }
}
