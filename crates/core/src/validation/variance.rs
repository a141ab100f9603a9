//! Directional variance calculations.

use cashcast_shared::types::{round_cents, round_ratio};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Whether a variance helps or hurts cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceDirection {
    /// Better for cash than forecast.
    Favorable,
    /// Worse for cash than forecast.
    Unfavorable,
    /// No variance.
    None,
}

/// Forecast vs actual variance for one cash direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalVariance {
    /// Projected amount.
    pub projected: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// Variance amount (actual - projected).
    pub variance: Decimal,
    /// Variance as a percentage of projected; `None` when projected is zero.
    pub variance_percent: Option<Decimal>,
    /// `max(0, 1 - |variance| / projected)`; `None` when projected is zero.
    pub accuracy: Option<Decimal>,
    /// Favorable or unfavorable for cash.
    pub direction: VarianceDirection,
}

impl DirectionalVariance {
    /// Calculates variance for inflows.
    ///
    /// For inflows: over forecast is favorable, under forecast is unfavorable.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if the variance percentage
    /// cannot be represented.
    pub fn for_inflow(projected: Decimal, actual: Decimal) -> Result<Self, ValidationError> {
        Self::calculate("inflow", projected, actual, true)
    }

    /// Calculates variance for outflows.
    ///
    /// For outflows: over forecast is unfavorable, under forecast is favorable.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if the variance percentage
    /// cannot be represented.
    pub fn for_outflow(projected: Decimal, actual: Decimal) -> Result<Self, ValidationError> {
        Self::calculate("outflow", projected, actual, false)
    }

    fn calculate(
        flow: &'static str,
        projected: Decimal,
        actual: Decimal,
        higher_is_better: bool,
    ) -> Result<Self, ValidationError> {
        let out_of_range = || ValidationError::OutOfRange(flow);
        let variance = actual.checked_sub(projected).ok_or_else(out_of_range)?;

        let (variance_percent, accuracy) = if projected.is_zero() {
            (None, None)
        } else {
            let ratio = variance.checked_div(projected).ok_or_else(out_of_range)?;
            let percent = ratio
                .checked_mul(Decimal::ONE_HUNDRED)
                .ok_or_else(out_of_range)?;
            let accuracy = (Decimal::ONE - ratio.abs()).max(Decimal::ZERO);
            (Some(round_cents(percent)), Some(round_ratio(accuracy)))
        };

        let direction = if variance.is_zero() {
            VarianceDirection::None
        } else if variance.is_sign_positive() == higher_is_better {
            VarianceDirection::Favorable
        } else {
            VarianceDirection::Unfavorable
        };

        Ok(Self {
            projected,
            actual,
            variance,
            variance_percent,
            accuracy,
            direction,
        })
    }
}
