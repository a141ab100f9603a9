//! Forecast vs actual validation.

pub mod error;
pub mod types;
pub mod validator;
pub mod variance;


pub use error::ValidationError;
pub use types::{Assessment, ProjectedTotals, ProjectionSource, ValidationInput, ValidationResult};
pub use validator::{ACCEPTABLE_ACCURACY, ForecastValidator, compare};
pub use variance::{DirectionalVariance, VarianceDirection};
