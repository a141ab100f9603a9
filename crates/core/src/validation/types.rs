//! Validation data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::variance::DirectionalVariance;

/// Projected inflow and outflow totals for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedTotals {
    /// Projected inflows.
    pub inflows: Decimal,
    /// Projected outflows.
    pub outflows: Decimal,
}

/// Actuals to check, optionally with the projection they are checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationInput {
    /// Forecast day.
    pub date: NaiveDate,
    /// Actual inflows.
    pub actual_inflows: Decimal,
    /// Actual outflows.
    pub actual_outflows: Decimal,
    /// Projected totals; taken from the projector when absent.
    pub projected: Option<ProjectedTotals>,
}

/// Where the projected totals came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionSource {
    /// Computed by the cash flow projector.
    Projector,
    /// Supplied with the request.
    Supplied,
}

/// Overall verdict on forecast accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Assessment {
    /// Overall accuracy at or above the threshold.
    Acceptable,
    /// Overall accuracy below the threshold.
    NeedsReview,
    /// No accuracy could be computed.
    Undefined,
}

/// Forecast vs actual comparison for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Forecast day.
    pub date: NaiveDate,
    /// Origin of the projected totals.
    pub projection_source: ProjectionSource,
    /// Inflow variance.
    pub inflows: DirectionalVariance,
    /// Outflow variance.
    pub outflows: DirectionalVariance,
    /// Effect of the variances on cash (inflow variance - outflow variance).
    pub net_impact: Decimal,
    /// Mean of the defined accuracies.
    pub overall_accuracy: Option<Decimal>,
    /// Verdict.
    pub assessment: Assessment,
}
