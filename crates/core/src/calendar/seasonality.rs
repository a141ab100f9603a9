//! Seasonal demand multipliers.
//!
//! A base value is scaled by `(1 + month) x (1 + weekday) x (1 + event)`.
//! Each of the three factors is clamped to
//! [`CALENDAR_FACTOR_FLOOR`]..=[`CALENDAR_FACTOR_CEILING`] before they are
//! combined.

use cashcast_shared::{EventEntry, SeasonalityTable};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Smallest calendar factor (-50%).
pub const CALENDAR_FACTOR_FLOOR: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Largest calendar factor (+100%).
pub const CALENDAR_FACTOR_CEILING: Decimal = Decimal::from_parts(200, 0, 0, false, 2);

/// Calendar factors for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalFactors {
    /// Month factor.
    pub month: Decimal,
    /// Weekday factor.
    pub weekday: Decimal,
    /// Event factor (1 when no event runs).
    pub event: Decimal,
    /// Name of the event driving the event factor.
    pub event_name: Option<String>,
}

impl SeasonalFactors {
    /// Looks up the factors for `date`.
    #[must_use]
    pub fn for_date(table: &SeasonalityTable, date: NaiveDate) -> Self {
        let month = table
            .months
            .iter()
            .find(|entry| entry.month == date.month())
            .map_or(Decimal::ZERO, |entry| entry.adjustment);

        let weekday = table
            .weekdays
            .iter()
            .find(|entry| entry.weekday == date.weekday())
            .map_or(Decimal::ZERO, |entry| entry.adjustment);

        let event = strongest_event(table, date);

        Self {
            month: clamp_factor(month),
            weekday: clamp_factor(weekday),
            event: clamp_factor(event.map_or(Decimal::ZERO, |e| e.impact)),
            event_name: event.map(|e| e.name.clone()),
        }
    }

    /// Combined multiplier.
    #[must_use]
    pub fn multiplier(&self) -> Decimal {
        self.month * self.weekday * self.event
    }
}

/// Returns the highest-impact event running on `date`.
///
/// Ties go to the entry listed first.
#[must_use]
pub fn strongest_event(table: &SeasonalityTable, date: NaiveDate) -> Option<&EventEntry> {
    table
        .events
        .iter()
        .filter(|event| event.covers(date))
        .fold(None, |best: Option<&EventEntry>, event| match best {
            Some(current) if current.impact >= event.impact => Some(current),
            _ => Some(event),
        })
}

fn clamp_factor(adjustment: Decimal) -> Decimal {
    (Decimal::ONE + adjustment).clamp(CALENDAR_FACTOR_FLOOR, CALENDAR_FACTOR_CEILING)
}
