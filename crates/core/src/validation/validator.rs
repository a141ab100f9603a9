//! Forecast validator.

use cashcast_shared::types::round_ratio;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::{
    Assessment, ProjectedTotals, ProjectionSource, ValidationInput, ValidationResult,
};
use super::variance::DirectionalVariance;
use crate::forecast::{CashFlowProjector, ProjectionInputs};

/// Overall accuracy at or above which a forecast is acceptable.
pub const ACCEPTABLE_ACCURACY: Decimal = Decimal::from_parts(85, 0, 0, false, 2);

/// Compares actuals with the projector's forecast.
#[derive(Debug, Clone, Copy)]
pub struct ForecastValidator<'a> {
    projector: CashFlowProjector<'a>,
}

impl<'a> ForecastValidator<'a> {
    /// Creates a validator backed by `projector`.
    #[must_use]
    pub const fn new(projector: CashFlowProjector<'a>) -> Self {
        Self { projector }
    }

    /// Validates actuals for one day.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NegativeAmount` for negative inputs and
    /// `ValidationError::OutOfRange` if a variance cannot be represented.
    pub fn validate(&self, input: &ValidationInput) -> Result<ValidationResult, ValidationError> {
        non_negative("actual_inflows", input.actual_inflows)?;
        non_negative("actual_outflows", input.actual_outflows)?;

        let (projected, source) = match input.projected {
            Some(totals) => {
                non_negative("projected_inflows", totals.inflows)?;
                non_negative("projected_outflows", totals.outflows)?;
                (totals, ProjectionSource::Supplied)
            }
            None => {
                let config = self.projector.config();
                let day = self.projector.project_day(
                    input.date,
                    &ProjectionInputs::baseline(config),
                    config.opening_balance,
                )?;
                let totals = ProjectedTotals {
                    inflows: day.total_inflows,
                    outflows: day.total_outflows,
                };
                (totals, ProjectionSource::Projector)
            }
        };

        let mut result = compare(
            input.date,
            projected,
            input.actual_inflows,
            input.actual_outflows,
        )?;
        result.projection_source = source;
        Ok(result)
    }
}

/// Compares explicit projected totals with actuals.
///
/// # Errors
///
/// Returns `ValidationError::OutOfRange` if a variance cannot be represented.
pub fn compare(
    date: NaiveDate,
    projected: ProjectedTotals,
    actual_inflows: Decimal,
    actual_outflows: Decimal,
) -> Result<ValidationResult, ValidationError> {
    let inflows = DirectionalVariance::for_inflow(projected.inflows, actual_inflows)?;
    let outflows = DirectionalVariance::for_outflow(projected.outflows, actual_outflows)?;
    let net_impact = inflows
        .variance
        .checked_sub(outflows.variance)
        .ok_or(ValidationError::OutOfRange("net"))?;

    let defined: Vec<Decimal> = [inflows.accuracy, outflows.accuracy]
        .into_iter()
        .flatten()
        .collect();

    let overall_accuracy = (!defined.is_empty()).then(|| {
        let total: Decimal = defined.iter().sum();
        round_ratio(total / Decimal::from(defined.len()))
    });

    let assessment = match overall_accuracy {
        Some(accuracy) if accuracy >= ACCEPTABLE_ACCURACY => Assessment::Acceptable,
        Some(_) => Assessment::NeedsReview,
        None => Assessment::Undefined,
    };

    Ok(ValidationResult {
        date,
        projection_source: ProjectionSource::Supplied,
        net_impact,
        inflows,
        outflows,
        overall_accuracy,
        assessment,
    })
}

fn non_negative(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(())
}
