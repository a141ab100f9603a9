//! Events calendar queries.

use std::collections::BTreeMap;

use cashcast_shared::{EventKind, SeasonalityTable};
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;

use super::range::DateRange;

/// One event on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventOccurrence {
    /// Day of the occurrence.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Event name.
    pub name: String,
    /// Event category.
    pub kind: EventKind,
    /// Signed demand impact fraction.
    pub impact: Decimal,
}

/// Events overlapping a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventListing {
    /// Queried range.
    pub range: DateRange,
    /// Category filter, if any.
    pub kind_filter: Option<EventKind>,
    /// Number of occurrences listed.
    pub total: usize,
    /// Occurrences per category.
    pub counts: BTreeMap<EventKind, usize>,
    /// Occurrences in chronological order.
    pub events: Vec<EventOccurrence>,
}

/// Lists every event day inside `range`, optionally restricted to one kind.
#[must_use]
pub fn list_events(
    table: &SeasonalityTable,
    range: &DateRange,
    kind_filter: Option<EventKind>,
) -> EventListing {
    let events: Vec<EventOccurrence> = range
        .iter()
        .flat_map(move |date| {
            table
                .events
                .iter()
                .filter(move |event| event.covers(date))
                .filter(move |event| kind_filter.is_none_or(|kind| event.kind == kind))
                .map(move |event| EventOccurrence {
                    date,
                    weekday: date.weekday(),
                    name: event.name.clone(),
                    kind: event.kind,
                    impact: event.impact,
                })
        })
        .collect();

    let mut counts = BTreeMap::new();
    for occurrence in &events {
        *counts.entry(occurrence.kind).or_insert(0) += 1;
    }

    EventListing {
        range: *range,
        kind_filter,
        total: events.len(),
        counts,
        events,
    }
}
