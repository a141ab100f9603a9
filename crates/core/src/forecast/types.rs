//! Forecast data types.

use std::collections::BTreeMap;

use cashcast_shared::{AccountCode, Currency, HotelConfig};
use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calendar::DateRange;

/// Occupancy, rate, and expense inputs for one projection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionInputs {
    /// Occupancy fraction.
    pub occupancy: Decimal,
    /// Average daily rate applied to room revenue.
    pub daily_rate: Decimal,
    /// Multiplier applied to every expense line.
    pub expense_multiplier: Decimal,
}

impl ProjectionInputs {
    /// Inputs taken straight from the hotel configuration.
    #[must_use]
    pub fn baseline(config: &HotelConfig) -> Self {
        Self {
            occupancy: config.avg_occupancy,
            daily_rate: config.avg_daily_rate,
            expense_multiplier: Decimal::ONE,
        }
    }
}

/// Projected cash movement for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyProjection {
    /// Projected day.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Combined seasonal multiplier.
    pub seasonal_multiplier: Decimal,
    /// Event driving the event factor, if any.
    pub event: Option<String>,
    /// Seasonally adjusted room revenue.
    pub room_revenue: Decimal,
    /// Sum of inflow lines.
    pub total_inflows: Decimal,
    /// Sum of outflow lines.
    pub total_outflows: Decimal,
    /// Inflows minus outflows.
    pub net_change: Decimal,
    /// Balance at the end of the day.
    pub closing_balance: Decimal,
    /// True if the closing balance is under the minimum reserve.
    pub below_minimum: bool,
    /// Amount per account code (every code present, zero when unused).
    pub breakdown: BTreeMap<AccountCode, Decimal>,
}

/// Totals over a projected range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastSummary {
    /// Number of projected days.
    pub days: usize,
    /// Balance before the first day.
    pub opening_balance: Decimal,
    /// Sum of daily inflows.
    pub total_inflows: Decimal,
    /// Sum of daily outflows.
    pub total_outflows: Decimal,
    /// Sum of daily net changes.
    pub net_change: Decimal,
    /// Balance after the last day.
    pub closing_balance: Decimal,
    /// Lowest closing balance in the range.
    pub lowest_balance: Decimal,
    /// Minimum reserve the balances were checked against.
    pub min_reserve: Decimal,
    /// Days whose closing balance was below the minimum reserve.
    pub days_below_minimum: usize,
}

/// Full projection for a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forecast {
    /// Hotel display name.
    pub hotel_name: String,
    /// Planning entity.
    pub entity_id: String,
    /// Reporting currency.
    pub currency: Currency,
    /// Projected range.
    pub range: DateRange,
    /// Range totals.
    pub summary: ForecastSummary,
    /// Daily projections in chronological order.
    pub days: Vec<DailyProjection>,
}

/// Whether the projected balance respects the reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashStatus {
    /// At or above the minimum reserve.
    Ok,
    /// Below the minimum reserve.
    BelowMinimum,
}

/// Single-day cash position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashPosition {
    /// Hotel display name.
    pub hotel_name: String,
    /// Position date.
    pub as_of: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Balance at the start of the day.
    pub opening_balance: Decimal,
    /// Projected inflows for the day.
    pub projected_inflows: Decimal,
    /// Projected outflows for the day.
    pub projected_outflows: Decimal,
    /// Inflows minus outflows.
    pub net_movement: Decimal,
    /// Projected balance at the end of the day.
    pub projected_closing: Decimal,
    /// Minimum reserve threshold.
    pub minimum_reserve: Decimal,
    /// Reserve status of the closing balance.
    pub status: CashStatus,
    /// Amount per account code.
    pub breakdown: BTreeMap<AccountCode, Decimal>,
}
