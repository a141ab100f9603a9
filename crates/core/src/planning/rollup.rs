//! Monthly aggregation.

use std::collections::BTreeMap;

use cashcast_shared::{AccountCode, FlowDirection, HotelConfig};
use chrono::Datelike;
use rust_decimal::Decimal;

use super::types::{MonthlyPeriod, MonthlyRollup, PlanningRecord};
use crate::forecast::Forecast;

/// Groups a forecast's days by calendar month.
#[must_use]
pub fn aggregate_monthly(forecast: &Forecast) -> Vec<MonthlyPeriod> {
    let mut months: Vec<MonthlyPeriod> = Vec::new();
    let mut previous_close = forecast.summary.opening_balance;

    for day in &forecast.days {
        let (year, month) = (day.date.year(), day.date.month());

        let starts_new = months
            .last()
            .is_none_or(|current| current.year != year || current.month != month);
        if starts_new {
            months.push(MonthlyPeriod {
                year,
                month,
                fiscal_year: format!("FY{:02}", year.rem_euclid(100)),
                period: day.date.format("%b").to_string(),
                days_in_period: 0,
                opening_balance: previous_close,
                total_inflows: Decimal::ZERO,
                total_outflows: Decimal::ZERO,
                net_change: Decimal::ZERO,
                closing_balance: previous_close,
                days_below_minimum: 0,
                accounts: BTreeMap::new(),
            });
        }

        let Some(current) = months.last_mut() else {
            continue;
        };
        current.days_in_period += 1;
        current.total_inflows += day.total_inflows;
        current.total_outflows += day.total_outflows;
        current.net_change += day.net_change;
        current.closing_balance = day.closing_balance;
        if day.below_minimum {
            current.days_below_minimum += 1;
        }
        for (code, amount) in &day.breakdown {
            *current.accounts.entry(*code).or_default() += *amount;
        }

        previous_close = day.closing_balance;
    }

    months
}

/// Builds planning import records; outflows are negative and zero lines are skipped.
#[must_use]
pub fn import_records(
    months: &[MonthlyPeriod],
    config: &HotelConfig,
    scenario: &str,
) -> Vec<PlanningRecord> {
    months
        .iter()
        .flat_map(move |period| {
            period
                .accounts
                .iter()
                .filter(|(_, amount)| !amount.is_zero())
                .map(move |(code, amount)| PlanningRecord {
                    entity: config.entity_id.clone(),
                    scenario: scenario.to_string(),
                    years: period.fiscal_year.clone(),
                    version: config.planning.version.clone(),
                    currency: config.currency,
                    cost_center: config.cost_center.clone(),
                    future1: config.planning.future1.clone(),
                    region: config.region.clone(),
                    period: period.period.clone(),
                    account: *code,
                    amount: signed(*code, *amount),
                })
        })
        .collect()
}

/// Aggregates `forecast` and builds its import records.
#[must_use]
pub fn monthly_rollup(forecast: &Forecast, config: &HotelConfig, scenario: &str) -> MonthlyRollup {
    let months = aggregate_monthly(forecast);
    let records = import_records(&months, config, scenario);

    MonthlyRollup {
        hotel_name: forecast.hotel_name.clone(),
        range: forecast.range,
        scenario: scenario.to_string(),
        months,
        records,
    }
}

fn signed(code: AccountCode, amount: Decimal) -> Decimal {
    match code.direction() {
        FlowDirection::Inflow => amount,
        FlowDirection::Outflow => -amount,
    }
}
