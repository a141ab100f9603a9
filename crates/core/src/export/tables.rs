//! Tabular views of the reports the exporter understands.

use cashcast_shared::AccountCode;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::forecast::{DailyProjection, Forecast};
use crate::planning::MonthlyRollup;
use crate::pricing::{MarketDataStatus, PricingReport};
use crate::scenario::ScenarioComparison;
use crate::validation::{
    Assessment, DirectionalVariance, ProjectionSource, ValidationResult, VarianceDirection,
};

/// A report that can be flattened into labelled metrics and rows.
///
/// Empty strings stand for absent values. Rows are chronological and
/// carry every numeric field of the record they come from. CSV holds the
/// rows only; headline metrics appear in the summary and JSON formats.
pub trait TabularReport: Serialize {
    /// Short machine name, e.g. `forecast`.
    fn report_type(&self) -> &'static str;

    /// Human-readable title.
    fn title(&self) -> String;

    /// Headline metrics as label/value pairs.
    fn summary(&self) -> Vec<(String, String)>;

    /// Column names, shared by every row.
    fn columns(&self) -> Vec<String>;

    /// One row per record.
    fn rows(&self) -> Vec<Vec<String>>;
}

fn cell(value: Decimal) -> String {
    value.to_string()
}

fn optional(value: Option<Decimal>) -> String {
    value.map(cell).unwrap_or_default()
}

fn metric(label: &str, value: impl ToString) -> (String, String) {
    (label.to_string(), value.to_string())
}

fn names(columns: &[&str]) -> Vec<String> {
    columns.iter().map(ToString::to_string).collect()
}

fn account_columns() -> impl Iterator<Item = String> {
    AccountCode::ALL.into_iter().map(|code| code.code().to_string())
}

fn account_cells(day: &DailyProjection) -> impl Iterator<Item = String> + '_ {
    AccountCode::ALL
        .into_iter()
        .map(|code| cell(day.breakdown.get(&code).copied().unwrap_or(Decimal::ZERO)))
}

fn daily_cells(day: &DailyProjection) -> Vec<String> {
    vec![
        day.date.to_string(),
        day.weekday.to_string(),
        cell(day.seasonal_multiplier),
        cell(day.room_revenue),
        cell(day.total_inflows),
        cell(day.total_outflows),
        cell(day.net_change),
        cell(day.closing_balance),
        day.below_minimum.to_string(),
        day.event.clone().unwrap_or_default(),
    ]
}

const DAILY_COLUMNS: [&str; 10] = [
    "date",
    "weekday",
    "seasonal_multiplier",
    "room_revenue",
    "total_inflows",
    "total_outflows",
    "net_change",
    "closing_balance",
    "below_minimum",
    "event",
];

impl TabularReport for Forecast {
    fn report_type(&self) -> &'static str {
        "forecast"
    }

    fn title(&self) -> String {
        format!(
            "Daily Cash Flow Forecast: {} to {}",
            self.range.start(),
            self.range.end()
        )
    }

    fn summary(&self) -> Vec<(String, String)> {
        let s = &self.summary;
        vec![
            metric("Hotel", &self.hotel_name),
            metric("Entity", &self.entity_id),
            metric("Currency", self.currency),
            metric("Days", s.days),
            metric("Opening balance", s.opening_balance),
            metric("Total inflows", s.total_inflows),
            metric("Total outflows", s.total_outflows),
            metric("Net change", s.net_change),
            metric("Closing balance", s.closing_balance),
            metric("Lowest balance", s.lowest_balance),
            metric("Minimum reserve", s.min_reserve),
            metric("Days below minimum", s.days_below_minimum),
        ]
    }

    fn columns(&self) -> Vec<String> {
        names(&DAILY_COLUMNS).into_iter().chain(account_columns()).collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.days
            .iter()
            .map(|day| daily_cells(day).into_iter().chain(account_cells(day)).collect())
            .collect()
    }
}

impl TabularReport for ScenarioComparison {
    fn report_type(&self) -> &'static str {
        "scenario"
    }

    fn title(&self) -> String {
        format!(
            "Scenario '{}': {} to {}",
            self.scenario_name,
            self.range.start(),
            self.range.end()
        )
    }

    fn summary(&self) -> Vec<(String, String)> {
        let a = &self.adjustments;
        let c = &self.cumulative;
        vec![
            metric("Hotel", &self.hotel_name),
            metric("Occupancy change", a.occupancy_change),
            metric("Rate change", a.rate_change),
            metric("Expense change", a.expense_change),
            metric("Baseline closing balance", self.baseline.closing_balance),
            metric("Scenario closing balance", self.scenario.closing_balance),
            metric("Inflows delta", c.inflows_delta),
            metric("Outflows delta", c.outflows_delta),
            metric("Net change delta", c.net_change_delta),
            metric("Ending balance delta", c.ending_balance_delta),
            metric("Baseline days below minimum", c.baseline_days_below_minimum),
            metric("Scenario days below minimum", c.scenario_days_below_minimum),
        ]
    }

    fn columns(&self) -> Vec<String> {
        names(&DAILY_COLUMNS)
            .into_iter()
            .chain(names(&[
                "baseline_net_change",
                "net_change_delta",
                "baseline_balance",
                "balance_delta",
            ]))
            .chain(account_columns())
            .collect()
    }

    /// Scenario-side daily figures, the diff against baseline, then the
    /// scenario's account breakdown.
    fn rows(&self) -> Vec<Vec<String>> {
        self.days
            .iter()
            .zip(&self.daily_diff)
            .map(|(day, diff)| {
                daily_cells(day)
                    .into_iter()
                    .chain([
                        cell(diff.baseline_net_change),
                        cell(diff.net_change_delta),
                        cell(diff.baseline_balance),
                        cell(diff.balance_delta),
                    ])
                    .chain(account_cells(day))
                    .collect()
            })
            .collect()
    }
}

impl TabularReport for PricingReport {
    fn report_type(&self) -> &'static str {
        "pricing"
    }

    fn title(&self) -> String {
        format!(
            "Rate Recommendations: {} to {}",
            self.range.start(),
            self.range.end()
        )
    }

    fn summary(&self) -> Vec<(String, String)> {
        let s = &self.summary;
        let market = match &self.market {
            MarketDataStatus::Live { provider } => format!("live ({provider})"),
            MarketDataStatus::Override => "override".to_string(),
            MarketDataStatus::Fallback { provider, .. } => format!("fallback ({provider})"),
        };
        vec![
            metric("Hotel", &self.hotel_name),
            metric("Market data", market),
            metric("Days", s.days),
            metric("Base rate", s.avg_base_rate),
            metric("Average recommended rate", s.avg_recommended_rate),
            metric("Projected room nights", s.projected_room_nights),
            metric("Base revenue", s.total_base_revenue),
            metric("Optimized revenue", s.total_optimized_revenue),
            metric("Revenue uplift", s.total_uplift),
            metric("Uplift percent", optional(s.uplift_percent)),
            metric("Days capped by competitors", s.days_capped),
        ]
    }

    fn columns(&self) -> Vec<String> {
        names(&[
            "date",
            "weekday",
            "base_rate",
            "occupancy",
            "lead_days",
            "occupancy_factor",
            "day_of_week_factor",
            "seasonality_factor",
            "lead_time_factor",
            "event_factor",
            "competitor_factor",
            "raw_rate",
            "recommended_rate",
            "total_adjustment",
            "competitor_rate",
            "competitor_cap",
            "competitor_cap_applied",
            "projected_rooms",
            "base_revenue",
            "optimized_revenue",
            "revenue_uplift",
            "event",
        ])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.days
            .iter()
            .map(|day| {
                let f = &day.factors;
                vec![
                    day.date.to_string(),
                    day.weekday.to_string(),
                    cell(day.base_rate),
                    cell(day.occupancy),
                    day.lead_days.to_string(),
                    cell(f.occupancy),
                    cell(f.day_of_week),
                    cell(f.seasonality),
                    cell(f.lead_time),
                    cell(f.event),
                    cell(f.competitor),
                    cell(day.raw_rate),
                    cell(day.recommended_rate),
                    cell(day.total_adjustment),
                    optional(day.competitor_rate),
                    optional(day.competitor_cap),
                    day.competitor_cap_applied.to_string(),
                    cell(day.projected_rooms),
                    cell(day.base_revenue),
                    cell(day.optimized_revenue),
                    cell(day.revenue_uplift),
                    day.event.clone().unwrap_or_default(),
                ]
            })
            .collect()
    }
}

fn variance_row(flow: &str, v: &DirectionalVariance) -> Vec<String> {
    let direction = match v.direction {
        VarianceDirection::Favorable => "favorable",
        VarianceDirection::Unfavorable => "unfavorable",
        VarianceDirection::None => "none",
    };
    vec![
        flow.to_string(),
        cell(v.projected),
        cell(v.actual),
        cell(v.variance),
        optional(v.variance_percent),
        optional(v.accuracy),
        direction.to_string(),
    ]
}

impl TabularReport for ValidationResult {
    fn report_type(&self) -> &'static str {
        "validation"
    }

    fn title(&self) -> String {
        format!("Forecast Validation: {}", self.date)
    }

    fn summary(&self) -> Vec<(String, String)> {
        let assessment = match self.assessment {
            Assessment::Acceptable => "ACCEPTABLE",
            Assessment::NeedsReview => "NEEDS_REVIEW",
            Assessment::Undefined => "UNDEFINED",
        };
        let source = match self.projection_source {
            ProjectionSource::Projector => "projector",
            ProjectionSource::Supplied => "supplied",
        };
        vec![
            metric("Date", self.date),
            metric("Projection source", source),
            metric("Net impact", self.net_impact),
            metric("Overall accuracy", optional(self.overall_accuracy)),
            metric("Assessment", assessment),
        ]
    }

    fn columns(&self) -> Vec<String> {
        names(&[
            "flow",
            "projected",
            "actual",
            "variance",
            "variance_percent",
            "accuracy",
            "direction",
        ])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![
            variance_row("inflows", &self.inflows),
            variance_row("outflows", &self.outflows),
        ]
    }
}

impl TabularReport for MonthlyRollup {
    fn report_type(&self) -> &'static str {
        "monthly"
    }

    fn title(&self) -> String {
        format!(
            "Monthly Planning Roll-up ({}): {} to {}",
            self.scenario,
            self.range.start(),
            self.range.end()
        )
    }

    fn summary(&self) -> Vec<(String, String)> {
        let inflows: Decimal = self.months.iter().map(|m| m.total_inflows).sum();
        let outflows: Decimal = self.months.iter().map(|m| m.total_outflows).sum();
        vec![
            metric("Hotel", &self.hotel_name),
            metric("Scenario", &self.scenario),
            metric("Months", self.months.len()),
            metric("Total inflows", inflows),
            metric("Total outflows", outflows),
            metric("Planning records", self.records.len()),
        ]
    }

    fn columns(&self) -> Vec<String> {
        names(&[
            "year",
            "month",
            "fiscal_year",
            "period",
            "days_in_period",
            "opening_balance",
            "total_inflows",
            "total_outflows",
            "net_change",
            "closing_balance",
            "days_below_minimum",
        ])
        .into_iter()
        .chain(account_columns())
        .collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.months
            .iter()
            .map(|month| {
                vec![
                    month.year.to_string(),
                    month.month.to_string(),
                    month.fiscal_year.clone(),
                    month.period.clone(),
                    month.days_in_period.to_string(),
                    cell(month.opening_balance),
                    cell(month.total_inflows),
                    cell(month.total_outflows),
                    cell(month.net_change),
                    cell(month.closing_balance),
                    month.days_below_minimum.to_string(),
                ]
                .into_iter()
                .chain(AccountCode::ALL.into_iter().map(|code| {
                    cell(month.accounts.get(&code).copied().unwrap_or(Decimal::ZERO))
                }))
                .collect()
            })
            .collect()
    }
}
