//! Scenario error types.

use cashcast_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::forecast::ForecastError;

/// Scenario-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    /// A delta would drive its base value to zero or below.
    #[error("Invalid {field} change {value}: must be greater than -1 (-100%)")]
    InvalidDelta {
        /// Name of the offending delta.
        field: &'static str,
        /// Supplied value.
        value: Decimal,
    },

    /// Applying a delta left the representable decimal range.
    #[error("{field} change {value} is too large to apply")]
    DeltaOutOfRange {
        /// Name of the offending delta.
        field: &'static str,
        /// Supplied value.
        value: Decimal,
    },

    /// Baseline and scenario differ by more than the decimal range allows.
    #[error("Scenario difference in {0} exceeds the supported amount range")]
    Overflow(&'static str),

    /// Underlying projection failed.
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

impl From<ScenarioError> for AppError {
    fn from(err: ScenarioError) -> Self {
        match err {
            ScenarioError::InvalidDelta { .. }
            | ScenarioError::DeltaOutOfRange { .. }
            | ScenarioError::Overflow(_) => Self::Validation(err.to_string()),
            ScenarioError::Forecast(inner) => inner.into(),
        }
    }
}
