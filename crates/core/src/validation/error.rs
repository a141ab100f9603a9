//! Validation error types.

use cashcast_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::forecast::ForecastError;

/// Validation-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount cannot be negative.
    #[error("{field} cannot be negative, got {value}")]
    NegativeAmount {
        /// Offending field.
        field: &'static str,
        /// Supplied value.
        value: Decimal,
    },

    /// A variance figure left the representable decimal range.
    #[error("{0} variance is too large to express")]
    OutOfRange(&'static str),

    /// Projecting the day failed.
    #[error(transparent)]
    Projection(#[from] ForecastError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Projection(inner) => inner.into(),
            _ => Self::Validation(err.to_string()),
        }
    }
}
