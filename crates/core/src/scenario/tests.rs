//! Property-based tests for the scenario module.

use cashcast_shared::HotelConfig;
use cashcast_shared::types::round_cents;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Scenario, ScenarioEngine, ScenarioError};
use crate::calendar::DateRange;
use crate::forecast::{CashFlowProjector, ForecastError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn february() -> DateRange {
    DateRange::new(date(2026, 2, 1), date(2026, 2, 28)).unwrap()
}

#[test]
fn test_february_soft_demand_scenario() {
    let config = HotelConfig::default();
    let engine = ScenarioEngine::new(&config).unwrap();
    let scenario = Scenario::new("Soft February", february())
        .with_occupancy_delta(dec!(-0.15))
        .with_rate_delta(dec!(-0.10));

    let comparison = engine.run(&scenario).unwrap();

    let base_revenue = dec!(250) * dec!(189) * dec!(0.75);
    for day in &comparison.days {
        let expected =
            round_cents(base_revenue * dec!(0.85) * dec!(0.90) * day.seasonal_multiplier);
        assert_eq!(day.room_revenue, expected, "room revenue on {}", day.date);
    }

    // Monday 2026-02-02 carries only the low-season factor.
    let monday = &comparison.days[1];
    assert_eq!(monday.seasonal_multiplier, dec!(0.65));
    assert_eq!(
        monday.room_revenue,
        round_cents(base_revenue * dec!(0.85) * dec!(0.90) * dec!(0.65))
    );

    assert!(comparison.cumulative.ending_balance_delta < Decimal::ZERO);
    assert!(comparison.cumulative.net_change_delta < Decimal::ZERO);
    assert_eq!(comparison.cumulative.outflows_delta, dec!(0));
    assert_eq!(comparison.daily_diff.len(), 28);
    assert_eq!(comparison.scenario.days, 28);
}

#[test]
fn test_expense_delta_moves_only_outflows() {
    let config = HotelConfig::default();
    let engine = ScenarioEngine::new(&config).unwrap();
    let scenario = Scenario::new("Cost push", february()).with_expense_delta(dec!(0.10));

    let comparison = engine.run(&scenario).unwrap();

    assert_eq!(comparison.cumulative.inflows_delta, dec!(0));
    assert!(comparison.cumulative.outflows_delta > Decimal::ZERO);
    assert_eq!(
        comparison.scenario.total_outflows,
        round_cents(comparison.baseline.total_outflows * dec!(1.10))
    );
}

#[test]
fn test_scenario_days_below_minimum_are_counted() {
    let config = HotelConfig {
        opening_balance: dec!(80000.00),
        ..HotelConfig::default()
    };
    let engine = ScenarioEngine::new(&config).unwrap();
    let scenario = Scenario::new("Collapse", february())
        .with_occupancy_delta(dec!(-0.90))
        .with_expense_delta(dec!(0.50));

    let comparison = engine.run(&scenario).unwrap();

    assert!(comparison.cumulative.scenario_days_below_minimum > 0);
    assert_eq!(comparison.cumulative.baseline_days_below_minimum, 0);
    assert!(comparison.daily_diff.iter().any(|d| d.below_minimum));
}

#[test]
fn test_delta_at_minus_one_rejected() {
    let config = HotelConfig::default();
    let engine = ScenarioEngine::new(&config).unwrap();

    let err = engine
        .run(&Scenario::new("Closed", february()).with_occupancy_delta(dec!(-1)))
        .unwrap_err();
    assert_eq!(
        err,
        ScenarioError::InvalidDelta {
            field: "occupancy",
            value: dec!(-1)
        }
    );

    let err = engine
        .run(&Scenario::new("Free", february()).with_rate_delta(dec!(-1.5)))
        .unwrap_err();
    assert!(matches!(err, ScenarioError::InvalidDelta { field: "rate", .. }));
}

#[test]
fn test_occupancy_capped_at_full_house() {
    let config = HotelConfig::default();
    let engine = ScenarioEngine::new(&config).unwrap();
    // Wednesday in a neutral month with no events.
    let range = DateRange::single(date(2026, 3, 4));

    let over = engine
        .run(&Scenario::new("Over", range).with_occupancy_delta(dec!(0.60)))
        .unwrap();
    let way_over = engine
        .run(&Scenario::new("Way over", range).with_occupancy_delta(dec!(1.00)))
        .unwrap();

    assert_eq!(over.days[0].room_revenue, dec!(47250.00));
    assert_eq!(way_over.days[0].room_revenue, over.days[0].room_revenue);
}

#[test]
fn test_huge_rate_delta_is_an_error() {
    let config = HotelConfig::default();
    let engine = ScenarioEngine::new(&config).unwrap();
    let range = DateRange::new(date(2026, 2, 1), date(2026, 2, 2)).unwrap();

    let delta = Decimal::from_i128_with_scale(10_i128.pow(26), 0);

    let err = engine
        .run(&Scenario::new("Runaway", range).with_rate_delta(delta))
        .unwrap_err();
    assert_eq!(
        err,
        ScenarioError::Forecast(ForecastError::Overflow("room revenue"))
    );

    let err = engine
        .run(&Scenario::new("Runaway", range).with_expense_delta(Decimal::MAX))
        .unwrap_err();
    assert_eq!(
        err,
        ScenarioError::DeltaOutOfRange {
            field: "expense",
            value: Decimal::MAX
        }
    );
}

proptest! {
    /// Zero deltas reproduce the baseline day for day.
    #[test]
    fn prop_zero_delta_matches_baseline(offset in 0i64..365, len in 1i64..=90) {
        let config = HotelConfig::default();
        let engine = ScenarioEngine::new(&config).unwrap();
        let start = date(2026, 1, 1) + Duration::days(offset);
        let range = DateRange::new(start, start + Duration::days(len - 1)).unwrap();

        let comparison = engine.run(&Scenario::new("Baseline", range)).unwrap();
        let baseline = CashFlowProjector::new(&config).unwrap().project(&range).unwrap();

        prop_assert_eq!(&comparison.days, &baseline.days);
        prop_assert_eq!(comparison.cumulative.ending_balance_delta, Decimal::ZERO);
        prop_assert!(comparison.daily_diff.iter().all(|d| d.balance_delta.is_zero()));
    }

    /// Lower occupancy never improves the ending balance.
    #[test]
    fn prop_occupancy_cut_lowers_balance(cut in 1i64..99) {
        let config = HotelConfig::default();
        let engine = ScenarioEngine::new(&config).unwrap();
        let delta = -Decimal::new(cut, 2);

        let comparison = engine
            .run(&Scenario::new("Cut", february()).with_occupancy_delta(delta))
            .unwrap();
        prop_assert!(comparison.cumulative.ending_balance_delta < Decimal::ZERO);
    }
}
