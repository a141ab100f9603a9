//! Dates, seasonality factors, and the local events calendar.

pub mod error;
pub mod events;
pub mod range;
pub mod seasonality;

#[cfg(test)]
mod tests;

pub use error::CalendarError;
pub use events::{EventListing, EventOccurrence, list_events};
pub use range::{DateRange, MAX_RANGE_DAYS};
pub use seasonality::{
    CALENDAR_FACTOR_CEILING, CALENDAR_FACTOR_FLOOR, SeasonalFactors, strongest_event,
};
