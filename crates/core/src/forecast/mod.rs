//! Daily cash flow projection.

pub mod error;
pub mod projector;
pub mod types;


pub use error::ForecastError;
pub use projector::{CashFlowProjector, validate_config};
pub use types::{
    CashPosition, CashStatus, DailyProjection, Forecast, ForecastSummary, ProjectionInputs,
};
