//! Cash flow projector.

use std::collections::BTreeMap;

use cashcast_shared::types::round_cents;
use cashcast_shared::{AccountCode, FlowDirection, HotelConfig};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::error::ForecastError;
use super::types::{
    CashPosition, CashStatus, DailyProjection, Forecast, ForecastSummary, ProjectionInputs,
};
use crate::calendar::{DateRange, SeasonalFactors};

/// Projects daily inflows, outflows, and balances for one hotel.
///
/// Every amount is computed per account line, rounded half-to-even to the
/// cent, and totals are sums of the rounded lines.
#[derive(Debug, Clone, Copy)]
pub struct CashFlowProjector<'a> {
    config: &'a HotelConfig,
}

impl<'a> CashFlowProjector<'a> {
    /// Creates a projector after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidConfig` if the configuration is unusable.
    pub fn new(config: &'a HotelConfig) -> Result<Self, ForecastError> {
        validate_config(config)?;
        Ok(Self { config })
    }

    /// Hotel configuration used for projections.
    #[must_use]
    pub const fn config(&self) -> &'a HotelConfig {
        self.config
    }

    /// Projects `range` with the configured occupancy, rate, and expenses.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::Overflow` if an amount leaves the decimal range.
    pub fn project(&self, range: &DateRange) -> Result<Forecast, ForecastError> {
        self.project_with(range, &ProjectionInputs::baseline(self.config))
    }

    /// Projects `range` with explicit inputs.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::Overflow` if an amount leaves the decimal range.
    pub fn project_with(
        &self,
        range: &DateRange,
        inputs: &ProjectionInputs,
    ) -> Result<Forecast, ForecastError> {
        let opening = self.config.opening_balance;
        let mut balance = opening;
        let mut days = Vec::with_capacity(range.days());

        for date in range.iter() {
            let day = self.project_day(date, inputs, balance)?;
            balance = day.closing_balance;
            days.push(day);
        }

        Ok(Forecast {
            hotel_name: self.config.hotel_name.clone(),
            entity_id: self.config.entity_id.clone(),
            currency: self.config.currency,
            range: *range,
            summary: summarize(opening, self.config.min_reserve, &days)?,
            days,
        })
    }

    /// Projects a single day starting from `opening_balance`.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::Overflow` if an amount leaves the decimal range.
    pub fn project_day(
        &self,
        date: NaiveDate,
        inputs: &ProjectionInputs,
        opening_balance: Decimal,
    ) -> Result<DailyProjection, ForecastError> {
        let config = self.config;
        let factors = SeasonalFactors::for_date(&config.seasonality, date);
        let rooms = Decimal::from(config.room_count);

        let room_revenue = product(
            "room revenue",
            &[rooms, inputs.daily_rate, inputs.occupancy, factors.multiplier()],
        )?;
        let expense_base = product(
            "expense base",
            &[rooms, config.avg_daily_rate, config.expense_base_ratio],
        )?;

        let mut breakdown: BTreeMap<AccountCode, Decimal> = AccountCode::ALL
            .into_iter()
            .map(|code| (code, round_cents(Decimal::ZERO)))
            .collect();

        let mut total_inflows = round_cents(Decimal::ZERO);
        for line in &config.revenue_mix {
            let amount = round_cents(product("inflows", &[room_revenue, line.ratio])?);
            total_inflows = add("inflows", total_inflows, amount)?;
            let entry = breakdown.entry(line.code).or_default();
            *entry = add("inflows", *entry, amount)?;
        }

        let mut total_outflows = round_cents(Decimal::ZERO);
        for line in &config.expense_schedule {
            if !line.schedule.is_due(date.day()) {
                continue;
            }
            let amount = round_cents(product(
                "outflows",
                &[expense_base, line.ratio, inputs.expense_multiplier],
            )?);
            total_outflows = add("outflows", total_outflows, amount)?;
            let entry = breakdown.entry(line.code).or_default();
            *entry = add("outflows", *entry, amount)?;
        }

        let net_change = total_inflows
            .checked_sub(total_outflows)
            .ok_or(ForecastError::Overflow("net change"))?;
        let closing_balance = add("closing balance", opening_balance, net_change)?;

        Ok(DailyProjection {
            date,
            weekday: date.weekday(),
            seasonal_multiplier: factors.multiplier(),
            event: factors.event_name,
            room_revenue: round_cents(room_revenue),
            total_inflows,
            total_outflows,
            net_change,
            closing_balance,
            below_minimum: closing_balance < config.min_reserve,
            breakdown,
        })
    }

    /// Single-day cash position for `as_of`, opening at the configured balance.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::Overflow` if an amount leaves the decimal range.
    pub fn cash_position(&self, as_of: NaiveDate) -> Result<CashPosition, ForecastError> {
        let opening = self.config.opening_balance;
        let day = self.project_day(as_of, &ProjectionInputs::baseline(self.config), opening)?;

        let status = if day.below_minimum {
            CashStatus::BelowMinimum
        } else {
            CashStatus::Ok
        };

        Ok(CashPosition {
            hotel_name: self.config.hotel_name.clone(),
            as_of,
            weekday: day.weekday,
            opening_balance: opening,
            projected_inflows: day.total_inflows,
            projected_outflows: day.total_outflows,
            net_movement: day.net_change,
            projected_closing: day.closing_balance,
            minimum_reserve: self.config.min_reserve,
            status,
            breakdown: day.breakdown,
        })
    }
}

fn product(what: &'static str, factors: &[Decimal]) -> Result<Decimal, ForecastError> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, factor| acc.checked_mul(*factor))
        .ok_or(ForecastError::Overflow(what))
}

fn add(what: &'static str, a: Decimal, b: Decimal) -> Result<Decimal, ForecastError> {
    a.checked_add(b).ok_or(ForecastError::Overflow(what))
}

fn summarize(
    opening: Decimal,
    min_reserve: Decimal,
    days: &[DailyProjection],
) -> Result<ForecastSummary, ForecastError> {
    let total_inflows = days
        .iter()
        .try_fold(Decimal::ZERO, |acc, d| add("total inflows", acc, d.total_inflows))?;
    let total_outflows = days
        .iter()
        .try_fold(Decimal::ZERO, |acc, d| add("total outflows", acc, d.total_outflows))?;
    let net_change = total_inflows
        .checked_sub(total_outflows)
        .ok_or(ForecastError::Overflow("net change"))?;
    let closing_balance = days.last().map_or(opening, |d| d.closing_balance);
    let lowest_balance = days
        .iter()
        .map(|d| d.closing_balance)
        .min()
        .unwrap_or(opening);

    Ok(ForecastSummary {
        days: days.len(),
        opening_balance: opening,
        total_inflows,
        total_outflows,
        net_change,
        closing_balance,
        lowest_balance,
        min_reserve,
        days_below_minimum: days.iter().filter(|d| d.below_minimum).count(),
    })
}

/// Checks that a hotel configuration can drive a projection.
///
/// # Errors
///
/// Returns `ForecastError::InvalidConfig` describing the first problem found.
pub fn validate_config(config: &HotelConfig) -> Result<(), ForecastError> {
    let invalid = |message: String| Err(ForecastError::InvalidConfig(message));

    if config.room_count == 0 {
        return invalid("room_count must be positive".into());
    }
    if config.avg_daily_rate <= Decimal::ZERO {
        return invalid("avg_daily_rate must be positive".into());
    }
    if config.avg_occupancy < Decimal::ZERO || config.avg_occupancy > Decimal::ONE {
        return invalid("avg_occupancy must be between 0 and 1".into());
    }
    if config.opening_balance < Decimal::ZERO {
        return invalid("opening_balance cannot be negative".into());
    }
    if config.min_reserve < Decimal::ZERO {
        return invalid("min_reserve cannot be negative".into());
    }
    if config.expense_base_ratio < Decimal::ZERO {
        return invalid("expense_base_ratio cannot be negative".into());
    }

    for line in &config.revenue_mix {
        if line.ratio < Decimal::ZERO {
            return invalid(format!("revenue ratio for {} cannot be negative", line.code));
        }
        if line.code.direction() != FlowDirection::Inflow {
            return invalid(format!("{} is not an inflow account", line.code));
        }
    }

    for line in &config.expense_schedule {
        if line.ratio < Decimal::ZERO {
            return invalid(format!("expense ratio for {} cannot be negative", line.code));
        }
        if line.code.direction() != FlowDirection::Outflow {
            return invalid(format!("{} is not an outflow account", line.code));
        }
    }

    if let Some(entry) = config
        .seasonality
        .months
        .iter()
        .find(|entry| !(1..=12).contains(&entry.month))
    {
        return invalid(format!("month {} is out of range", entry.month));
    }

    if let Some(event) = config.seasonality.events.iter().find(|e| e.start > e.end) {
        return invalid(format!("event '{}' ends before it starts", event.name));
    }

    Ok(())
}
