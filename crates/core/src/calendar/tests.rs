//! Property-based and table tests for the calendar module.

use cashcast_shared::{EventEntry, EventKind, HotelConfig, SeasonalityTable};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{
    CALENDAR_FACTOR_CEILING, CALENDAR_FACTOR_FLOOR, DateRange, SeasonalFactors, list_events,
    strongest_event,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn table() -> SeasonalityTable {
    HotelConfig::default().seasonality
}

#[test]
fn test_february_weekday_multiplier() {
    // 2026-02-02 is a Monday.
    let factors = SeasonalFactors::for_date(&table(), date(2026, 2, 2));
    assert_eq!(factors.month, dec!(0.65));
    assert_eq!(factors.weekday, dec!(1));
    assert_eq!(factors.event, dec!(1));
    assert_eq!(factors.multiplier(), dec!(0.65));
    assert!(factors.event_name.is_none());
}

#[test]
fn test_event_weekend_stacks_multiplicatively() {
    // Valentine's Day 2026 falls on a Saturday.
    let factors = SeasonalFactors::for_date(&table(), date(2026, 2, 14));
    assert_eq!(factors.event_name.as_deref(), Some("Valentine's Day"));
    assert_eq!(factors.multiplier(), dec!(0.65) * dec!(1.15) * dec!(1.25));
}

#[test]
fn test_overlapping_events_use_strongest() {
    let mut table = table();
    table.events.push(EventEntry {
        name: "Trade Fair".into(),
        kind: EventKind::Convention,
        start: date(2026, 8, 1),
        end: date(2026, 8, 10),
        impact: dec!(0.20),
    });

    let event = strongest_event(&table, date(2026, 8, 2)).unwrap();
    assert_eq!(event.name, "Lollapalooza");
    assert_eq!(event.impact, dec!(0.50));

    let event = strongest_event(&table, date(2026, 8, 9)).unwrap();
    assert_eq!(event.name, "Trade Fair");
}

#[test]
fn test_extreme_adjustments_are_clamped() {
    let mut table = table();
    table.months[0].adjustment = dec!(-0.90);
    table.events.push(EventEntry {
        name: "Eclipse".into(),
        kind: EventKind::Event,
        start: date(2026, 1, 5),
        end: date(2026, 1, 5),
        impact: dec!(3.00),
    });

    let factors = SeasonalFactors::for_date(&table, date(2026, 1, 5));
    assert_eq!(factors.month, CALENDAR_FACTOR_FLOOR);
    assert_eq!(factors.event, CALENDAR_FACTOR_CEILING);
}

#[test]
fn test_list_events_counts_per_kind() {
    let range = DateRange::new(date(2026, 4, 1), date(2026, 4, 30)).unwrap();
    let listing = list_events(&table(), &range, None);
    assert_eq!(listing.total, 3);
    assert_eq!(listing.counts.get(&EventKind::Sports), Some(&3));
    assert_eq!(listing.events[0].date, date(2026, 4, 3));
    assert_eq!(listing.events[2].name, "NCAA Championship");
}

#[test]
fn test_list_events_filters_by_kind() {
    let range = DateRange::new(date(2026, 11, 20), date(2026, 12, 31)).unwrap();
    let listing = list_events(&table(), &range, Some(EventKind::Shopping));
    assert_eq!(listing.total, 1);
    assert_eq!(listing.events[0].name, "Black Friday");
    assert_eq!(listing.counts.len(), 1);

    let holidays = list_events(&table(), &range, Some(EventKind::Holiday));
    assert_eq!(holidays.total, 5);
}

#[test]
fn test_multi_day_event_listed_each_day() {
    let range = DateRange::new(date(2026, 8, 1), date(2026, 8, 4)).unwrap();
    let listing = list_events(&table(), &range, Some(EventKind::Festival));
    assert_eq!(listing.total, 4);
    assert!(listing.events.iter().all(|e| e.name == "Lollapalooza"));
}

proptest! {
    /// Every calendar factor stays inside its clamp range.
    #[test]
    fn prop_factors_within_bounds(offset in 0i64..730) {
        let day = date(2026, 1, 1) + Duration::days(offset);
        let factors = SeasonalFactors::for_date(&table(), day);
        for factor in [factors.month, factors.weekday, factors.event] {
            prop_assert!(factor >= CALENDAR_FACTOR_FLOOR);
            prop_assert!(factor <= CALENDAR_FACTOR_CEILING);
        }
        prop_assert!(factors.multiplier() > Decimal::ZERO);
    }

    /// Valid ranges iterate over exactly `days()` consecutive dates.
    #[test]
    fn prop_range_iteration_length(offset in 0i64..365, len in 1i64..=90) {
        let start = date(2026, 1, 1) + Duration::days(offset);
        let end = start + Duration::days(len - 1);
        let range = DateRange::new(start, end).unwrap();
        let dates: Vec<_> = range.iter().collect();
        prop_assert_eq!(dates.len(), range.days());
        prop_assert_eq!(dates.first().copied(), Some(start));
        prop_assert_eq!(dates.last().copied(), Some(end));
    }

    /// Ranges longer than 90 days are always rejected.
    #[test]
    fn prop_long_ranges_rejected(len in 91i64..400) {
        let start = date(2026, 1, 1);
        let end = start + Duration::days(len - 1);
        prop_assert!(DateRange::new(start, end).is_err());
    }
}
