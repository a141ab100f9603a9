//! Inclusive, bounded date ranges.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::CalendarError;

/// Maximum number of days (inclusive) a single request may cover.
pub const MAX_RANGE_DAYS: i64 = 90;

/// Inclusive date range of at most [`MAX_RANGE_DAYS`] days.
///
/// Only constructible through [`DateRange::new`] or [`DateRange::single`],
/// so every value in circulation is already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError` if `start > end` or the range covers more
    /// than [`MAX_RANGE_DAYS`] days.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::StartAfterEnd { start, end });
        }

        let days = (end - start).num_days() + 1;
        if days > MAX_RANGE_DAYS {
            return Err(CalendarError::TooLong {
                days,
                max: MAX_RANGE_DAYS,
            });
        }

        Ok(Self { start, end })
    }

    /// Creates a one-day range.
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both ends.
    #[must_use]
    pub fn days(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or_default()
    }

    /// Returns true if `date` falls within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterates over every date in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.start.iter_days().take(self.days())
    }
}
