//! Scenario data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calendar::DateRange;
use crate::forecast::{DailyProjection, ForecastSummary};

/// A named set of fractional adjustments over a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Projected range.
    pub range: DateRange,
    /// Occupancy change (e.g. -0.15 for -15%).
    pub occupancy_delta: Decimal,
    /// Room rate change.
    pub rate_delta: Decimal,
    /// Change applied to every expense line.
    pub expense_delta: Decimal,
}

impl Scenario {
    /// Creates a scenario with zero deltas.
    #[must_use]
    pub fn new(name: impl Into<String>, range: DateRange) -> Self {
        Self {
            name: name.into(),
            range,
            occupancy_delta: Decimal::ZERO,
            rate_delta: Decimal::ZERO,
            expense_delta: Decimal::ZERO,
        }
    }

    /// Sets the occupancy delta.
    #[must_use]
    pub fn with_occupancy_delta(mut self, delta: Decimal) -> Self {
        self.occupancy_delta = delta;
        self
    }

    /// Sets the rate delta.
    #[must_use]
    pub fn with_rate_delta(mut self, delta: Decimal) -> Self {
        self.rate_delta = delta;
        self
    }

    /// Sets the expense delta.
    #[must_use]
    pub fn with_expense_delta(mut self, delta: Decimal) -> Self {
        self.expense_delta = delta;
        self
    }
}

/// Deltas echoed back in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioAdjustments {
    /// Occupancy change fraction.
    pub occupancy_change: Decimal,
    /// Rate change fraction.
    pub rate_change: Decimal,
    /// Expense change fraction.
    pub expense_change: Decimal,
}

/// Baseline vs scenario for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyDiff {
    /// Day compared.
    pub date: NaiveDate,
    /// Baseline net change.
    pub baseline_net_change: Decimal,
    /// Scenario net change.
    pub scenario_net_change: Decimal,
    /// Scenario minus baseline net change.
    pub net_change_delta: Decimal,
    /// Baseline closing balance.
    pub baseline_balance: Decimal,
    /// Scenario closing balance.
    pub scenario_balance: Decimal,
    /// Scenario minus baseline closing balance.
    pub balance_delta: Decimal,
    /// Scenario balance below the minimum reserve.
    pub below_minimum: bool,
}

/// Range-level scenario impact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CumulativeDiff {
    /// Scenario minus baseline total inflows.
    pub inflows_delta: Decimal,
    /// Scenario minus baseline total outflows.
    pub outflows_delta: Decimal,
    /// Scenario minus baseline net change.
    pub net_change_delta: Decimal,
    /// Scenario minus baseline ending balance.
    pub ending_balance_delta: Decimal,
    /// Baseline days below the minimum reserve.
    pub baseline_days_below_minimum: usize,
    /// Scenario days below the minimum reserve.
    pub scenario_days_below_minimum: usize,
}

/// Result of running a scenario against its baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioComparison {
    /// Hotel display name.
    pub hotel_name: String,
    /// Scenario name.
    pub scenario_name: String,
    /// Compared range.
    pub range: DateRange,
    /// Applied deltas.
    pub adjustments: ScenarioAdjustments,
    /// Baseline totals.
    pub baseline: ForecastSummary,
    /// Scenario totals.
    pub scenario: ForecastSummary,
    /// Scenario daily projections.
    pub days: Vec<DailyProjection>,
    /// Day-by-day differences.
    pub daily_diff: Vec<DailyDiff>,
    /// Range-level differences.
    pub cumulative: CumulativeDiff,
}
