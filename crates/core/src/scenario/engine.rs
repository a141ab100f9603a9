//! Scenario engine for running what-if projections.

use cashcast_shared::HotelConfig;
use rust_decimal::Decimal;

use super::error::ScenarioError;
use super::types::{CumulativeDiff, DailyDiff, Scenario, ScenarioAdjustments, ScenarioComparison};
use crate::forecast::{CashFlowProjector, ProjectionInputs};

/// Engine for running what-if scenarios against the baseline projection.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioEngine<'a> {
    projector: CashFlowProjector<'a>,
}

impl<'a> ScenarioEngine<'a> {
    /// Creates a scenario engine for `config`.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError::Forecast` if the configuration is invalid.
    pub fn new(config: &'a HotelConfig) -> Result<Self, ScenarioError> {
        Ok(Self {
            projector: CashFlowProjector::new(config)?,
        })
    }

    /// Creates a scenario engine from an existing projector.
    #[must_use]
    pub const fn from_projector(projector: CashFlowProjector<'a>) -> Self {
        Self { projector }
    }

    /// Applies a fractional delta to a value: `value x (1 + delta)`.
    ///
    /// Returns `None` if the result leaves the decimal range.
    #[must_use]
    pub fn apply_delta(value: Decimal, delta: Decimal) -> Option<Decimal> {
        value.checked_mul(delta)?.checked_add(value)
    }

    /// Runs a scenario and compares it with the baseline.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError::InvalidDelta` if any delta is at or below -1,
    /// and `ScenarioError::DeltaOutOfRange` or `ScenarioError::Overflow` if the
    /// adjusted amounts leave the decimal range.
    pub fn run(&self, scenario: &Scenario) -> Result<ScenarioComparison, ScenarioError> {
        validate_delta("occupancy", scenario.occupancy_delta)?;
        validate_delta("rate", scenario.rate_delta)?;
        validate_delta("expense", scenario.expense_delta)?;

        let config = self.projector.config();
        let baseline = self.projector.project(&scenario.range)?;

        let inputs = ProjectionInputs {
            occupancy: with_delta("occupancy", config.avg_occupancy, scenario.occupancy_delta)?
                .min(Decimal::ONE),
            daily_rate: with_delta("rate", config.avg_daily_rate, scenario.rate_delta)?,
            expense_multiplier: with_delta("expense", Decimal::ONE, scenario.expense_delta)?,
        };
        let adjusted = self.projector.project_with(&scenario.range, &inputs)?;

        let daily_diff = baseline
            .days
            .iter()
            .zip(&adjusted.days)
            .map(|(base, alt)| {
                Ok(DailyDiff {
                    date: base.date,
                    baseline_net_change: base.net_change,
                    scenario_net_change: alt.net_change,
                    net_change_delta: diff("net change", alt.net_change, base.net_change)?,
                    baseline_balance: base.closing_balance,
                    scenario_balance: alt.closing_balance,
                    balance_delta: diff("balance", alt.closing_balance, base.closing_balance)?,
                    below_minimum: alt.below_minimum,
                })
            })
            .collect::<Result<Vec<_>, ScenarioError>>()?;

        let (base, alt) = (&baseline.summary, &adjusted.summary);
        let cumulative = CumulativeDiff {
            inflows_delta: diff("inflows", alt.total_inflows, base.total_inflows)?,
            outflows_delta: diff("outflows", alt.total_outflows, base.total_outflows)?,
            net_change_delta: diff("net change", alt.net_change, base.net_change)?,
            ending_balance_delta: diff("balance", alt.closing_balance, base.closing_balance)?,
            baseline_days_below_minimum: base.days_below_minimum,
            scenario_days_below_minimum: alt.days_below_minimum,
        };

        Ok(ScenarioComparison {
            hotel_name: config.hotel_name.clone(),
            scenario_name: scenario.name.clone(),
            range: scenario.range,
            adjustments: ScenarioAdjustments {
                occupancy_change: scenario.occupancy_delta,
                rate_change: scenario.rate_delta,
                expense_change: scenario.expense_delta,
            },
            baseline: baseline.summary,
            scenario: adjusted.summary,
            days: adjusted.days,
            daily_diff,
            cumulative,
        })
    }
}

fn with_delta(
    field: &'static str,
    value: Decimal,
    delta: Decimal,
) -> Result<Decimal, ScenarioError> {
    ScenarioEngine::apply_delta(value, delta)
        .ok_or(ScenarioError::DeltaOutOfRange { field, value: delta })
}

fn diff(
    what: &'static str,
    scenario: Decimal,
    baseline: Decimal,
) -> Result<Decimal, ScenarioError> {
    scenario
        .checked_sub(baseline)
        .ok_or(ScenarioError::Overflow(what))
}

fn validate_delta(field: &'static str, value: Decimal) -> Result<(), ScenarioError> {
    if value <= -Decimal::ONE {
        return Err(ScenarioError::InvalidDelta { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_apply_positive_delta() {
        assert_eq!(ScenarioEngine::apply_delta(dec!(100), dec!(0.10)), Some(dec!(110)));
    }

    #[test]
    fn test_apply_negative_delta() {
        assert_eq!(ScenarioEngine::apply_delta(dec!(189), dec!(-0.10)), Some(dec!(170.1)));
    }

    #[test]
    fn test_apply_zero_delta_is_identity() {
        assert_eq!(ScenarioEngine::apply_delta(dec!(0.75), dec!(0)), Some(dec!(0.75)));
    }

    #[test]
    fn test_apply_delta_out_of_range() {
        assert_eq!(ScenarioEngine::apply_delta(dec!(189), Decimal::MAX), None);
    }
}
