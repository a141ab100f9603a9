//! Property-based tests for the pricing module.

use cashcast_shared::types::{round_cents, truncate_cents};
use cashcast_shared::{HotelConfig, PricingConfig};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{
    MarketDataStatus, MarketSnapshot, MarketSource, OccupancyTier, Positioning, PricingEngine,
    PricingError, PricingRequest, RateAction, SourceError, StaticMarketSource,
    analyze_competitors, compare_pms_rates, inventory_outlook,
};
use crate::calendar::DateRange;

struct OfflineSource;

impl MarketSource for OfflineSource {
    fn name(&self) -> &str {
        "offline"
    }

    fn fetch(&self, _range: &DateRange) -> Result<MarketSnapshot, SourceError> {
        Err(SourceError::Unavailable {
            provider: "offline".to_string(),
            reason: "connection refused".to_string(),
        })
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn single(day: NaiveDate) -> PricingRequest {
    PricingRequest::new(DateRange::single(day))
}

#[test]
fn test_fallback_uses_config_without_cap() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);

    // Wednesday in March, default occupancy 0.75, same-day booking.
    let report = engine.optimize(&single(date(2026, 3, 4)), &OfflineSource).unwrap();
    let day = &report.days[0];

    assert_eq!(
        report.market,
        MarketDataStatus::Fallback {
            provider: "offline".into(),
            reason: "connection refused".into()
        }
    );
    assert_eq!(day.factors.occupancy, dec!(1.15));
    assert_eq!(day.factors.day_of_week, dec!(0.95));
    assert_eq!(day.factors.seasonality, dec!(1.05));
    assert_eq!(day.factors.lead_time, dec!(1.30));
    assert_eq!(day.raw_rate, dec!(281.85));
    assert_eq!(day.recommended_rate, dec!(281.85));
    assert_eq!(day.total_adjustment, dec!(0.4913));
    assert!(!day.competitor_cap_applied);
    assert!(day.competitor_rate.is_none());
}

#[test]
fn test_summary_revenue_uplift() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);

    let report = engine.optimize(&single(date(2026, 3, 4)), &OfflineSource).unwrap();

    assert_eq!(report.days[0].projected_rooms, dec!(188));
    assert_eq!(report.summary.total_base_revenue, dec!(35437.50));
    assert_eq!(report.summary.total_optimized_revenue, dec!(52846.88));
    assert_eq!(report.summary.total_uplift, dec!(17409.38));
    assert_eq!(report.summary.uplift_percent, Some(dec!(49.13)));
    assert_eq!(report.summary.avg_recommended_rate, dec!(281.85));
}

#[test]
fn test_live_market_applies_competitor_cap() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);
    let source = StaticMarketSource::new(&pricing, &hotel);

    // Saturday in December at 90% occupancy, booked 10 days ahead.
    let request = PricingRequest {
        occupancy: Some(dec!(0.90)),
        lead_days: 10,
        ..single(date(2026, 12, 19))
    };
    let report = engine.optimize(&request, &source).unwrap();
    let day = &report.days[0];

    assert_eq!(
        report.market,
        MarketDataStatus::Live {
            provider: StaticMarketSource::NAME.into()
        }
    );
    assert_eq!(day.raw_rate, dec!(414.62));
    assert_eq!(day.competitor_rate, Some(dec!(246.25)));
    assert_eq!(day.competitor_cap, Some(dec!(283.18)));
    assert!(day.competitor_cap_applied);
    assert_eq!(day.recommended_rate, dec!(283.18));
    assert!(day.factors.competitor < Decimal::ONE);
    assert_eq!(report.summary.days_capped, 1);
}

#[test]
fn test_override_replaces_market_source() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);

    let request = PricingRequest {
        occupancy: Some(dec!(0.90)),
        lead_days: 10,
        competitor_rate: Some(dec!(300)),
        ..single(date(2026, 12, 19))
    };
    // The offline source is never consulted when a rate is supplied.
    let report = engine.optimize(&request, &OfflineSource).unwrap();

    assert_eq!(report.market, MarketDataStatus::Override);
    assert_eq!(report.days[0].recommended_rate, dec!(345.00));
    assert!(report.days[0].competitor_cap_applied);
}

#[test]
fn test_rate_ceiling() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);

    // New Year's Eve, nearly sold out, same-day.
    let request = PricingRequest {
        occupancy: Some(dec!(0.96)),
        ..single(date(2026, 12, 31))
    };
    let report = engine.optimize(&request, &OfflineSource).unwrap();

    assert_eq!(report.days[0].event.as_deref(), Some("New Year's Eve"));
    assert_eq!(report.days[0].recommended_rate, dec!(449.00));
    assert!(report.days[0].raw_rate > dec!(449));
}

#[test]
fn test_rate_floor() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);

    // Tuesday in January, empty hotel, booked a year out.
    let request = PricingRequest {
        occupancy: Some(dec!(0.10)),
        lead_days: 400,
        ..single(date(2026, 1, 6))
    };
    let report = engine.optimize(&request, &OfflineSource).unwrap();

    assert_eq!(report.days[0].raw_rate, dec!(84.82));
    assert_eq!(report.days[0].recommended_rate, dec!(99.00));
}

#[test]
fn test_invalid_occupancy_rejected() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);

    let request = PricingRequest {
        occupancy: Some(dec!(85)),
        ..single(date(2026, 3, 4))
    };
    assert_eq!(
        engine.optimize(&request, &OfflineSource).unwrap_err(),
        PricingError::InvalidOccupancy(dec!(85))
    );
}

#[test]
fn test_competitor_analysis() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);
    let source = StaticMarketSource::new(&pricing, &hotel);

    let analysis = analyze_competitors(&engine, date(2026, 3, 4), &source).unwrap();

    assert_eq!(analysis.market.average, dec!(187.15));
    assert_eq!(analysis.market.minimum, dec!(175.75));
    assert_eq!(analysis.market.maximum, dec!(198.55));
    assert_eq!(analysis.market.spread, dec!(22.80));
    assert_eq!(analysis.our_pricing.recommended_rate, dec!(281.85));
    assert_eq!(analysis.position.vs_average, dec!(94.70));
    assert_eq!(analysis.position.vs_average_pct, dec!(50.60));
    assert_eq!(analysis.position.rank, 1);
    assert_eq!(analysis.position.positioning, Positioning::Premium);
    assert!(analysis.recommendations[0].starts_with("Rate significantly above market"));
    assert!(analysis.event.is_none());
}

#[test]
fn test_competitor_analysis_mentions_event() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);
    let source = StaticMarketSource::new(&pricing, &hotel);

    let analysis = analyze_competitors(&engine, date(2026, 10, 11), &source).unwrap();

    assert_eq!(analysis.event.as_ref().unwrap().name, "Chicago Marathon");
    assert!(
        analysis
            .recommendations
            .iter()
            .any(|r| r == "Event 'Chicago Marathon' - ensure rate captures demand surge")
    );
}

#[test]
fn test_competitor_analysis_requires_source() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);

    let err = analyze_competitors(&engine, date(2026, 3, 4), &OfflineSource).unwrap_err();
    assert!(matches!(err, PricingError::SourceUnavailable(_)));
}

#[test]
fn test_binding_cap_reports_exact_cut() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);

    // Cap of 57.50 against a bounded rate of 281.85.
    let request = PricingRequest {
        competitor_rate: Some(dec!(50)),
        ..single(date(2026, 3, 4))
    };
    let day = &engine.optimize(&request, &OfflineSource).unwrap().days[0];

    assert!(day.competitor_cap_applied);
    assert_eq!(day.recommended_rate, dec!(57.50));
    assert_eq!(day.factors.competitor, dec!(0.2040));
    assert!(day.factors.competitor < pricing.factor_floor);
    assert_eq!(round_cents(day.raw_rate * day.factors.competitor), day.recommended_rate);
}

#[test]
fn test_unrepresentable_competitor_rate_rejected() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);
    let huge = Decimal::from_i128_with_scale(7 * 10_i128.pow(28), 0);

    let request = PricingRequest {
        competitor_rate: Some(huge),
        ..single(date(2026, 2, 1))
    };
    assert_eq!(
        engine.optimize(&request, &OfflineSource).unwrap_err(),
        PricingError::InvalidCompetitorRate(huge)
    );
    assert_eq!(engine.competitor_cap(huge), None);
}

#[rstest]
#[case(dec!(281.85), dec!(189.00), RateAction::Increase)]
#[case(dec!(150.00), dec!(189.00), RateAction::Decrease)]
#[case(dec!(190.00), dec!(189.00), RateAction::Ok)]
#[case(dec!(192.78), dec!(189.00), RateAction::Ok)]
#[case(dec!(185.22), dec!(189.00), RateAction::Ok)]
fn test_rate_action_bands(
    #[case] recommended: Decimal,
    #[case] current: Decimal,
    #[case] expected: RateAction,
) {
    assert_eq!(RateAction::classify(recommended, current), expected);
}

#[test]
fn test_pms_rates_compared_with_recommendation() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);
    let source = StaticMarketSource::new(&pricing, &hotel);

    // Wednesday and Thursday in March, no events.
    let range = DateRange::new(date(2026, 3, 4), date(2026, 3, 5)).unwrap();
    let comparison = compare_pms_rates(&engine, &range, " bar ", &source).unwrap();

    assert_eq!(comparison.rate_code, "BAR");
    assert_eq!(comparison.property_id, "CHICAGOL7");
    assert_eq!(comparison.provider, StaticMarketSource::NAME);

    let wednesday = &comparison.days[0];
    assert_eq!(wednesday.pms_rate, dec!(189.00));
    assert_eq!(wednesday.recommended_rate, dec!(281.85));
    assert_eq!(wednesday.difference, dec!(92.85));
    assert_eq!(wednesday.difference_percent, Some(dec!(49.13)));
    assert_eq!(wednesday.action, RateAction::Increase);

    let thursday = &comparison.days[1];
    assert_eq!(thursday.recommended_rate, dec!(311.52));
    assert_eq!(thursday.difference, dec!(122.52));

    let summary = &comparison.summary;
    assert_eq!(summary.days, 2);
    assert_eq!(summary.rates_to_increase, 2);
    assert_eq!(summary.rates_to_decrease, 0);
    assert_eq!(summary.rates_ok, 0);
    assert_eq!(summary.avg_pms_rate, dec!(189.00));
    assert_eq!(summary.avg_recommended_rate, dec!(296.68));
    assert_eq!(summary.potential_daily_uplift, dec!(107.68));
}

#[test]
fn test_pms_comparison_rejects_blank_rate_code() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);
    let source = StaticMarketSource::new(&pricing, &hotel);

    let err = compare_pms_rates(&engine, &DateRange::single(date(2026, 3, 4)), "  ", &source)
        .unwrap_err();
    assert!(matches!(err, PricingError::InvalidRateCode(_)));
}

#[test]
fn test_pms_views_require_a_connected_source() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);
    let range = DateRange::single(date(2026, 3, 4));

    let err = compare_pms_rates(&engine, &range, "BAR", &OfflineSource).unwrap_err();
    assert!(matches!(err, PricingError::SourceUnavailable(_)));
    let err = inventory_outlook(&engine, &range, &OfflineSource).unwrap_err();
    assert!(matches!(err, PricingError::SourceUnavailable(_)));
}

#[test]
fn test_inventory_outlook_prices_at_booked_occupancy() {
    let hotel = HotelConfig::default();
    let pricing = PricingConfig::default();
    let engine = PricingEngine::new(&hotel, &pricing);
    let source = StaticMarketSource::new(&pricing, &hotel);

    let outlook =
        inventory_outlook(&engine, &DateRange::single(date(2026, 3, 4)), &source).unwrap();
    let day = &outlook.days[0];

    assert_eq!(day.occupied, 188);
    assert_eq!(day.occupancy, dec!(0.752));
    assert_eq!(day.tier, OccupancyTier::High);
    assert_eq!(day.recommended_rate, dec!(281.85));
    assert_eq!(day.rate_adjustment, dec!(0.4913));

    assert_eq!(outlook.summary.total_room_nights, 250);
    assert_eq!(outlook.summary.total_available, 62);
    assert_eq!(outlook.summary.total_occupied, 188);
    assert_eq!(outlook.summary.avg_occupancy, dec!(0.752));
    assert_eq!(outlook.summary.high_demand_days, 0);
    assert_eq!(outlook.summary.low_demand_days, 0);

    // Low-season Monday.
    let quiet = inventory_outlook(&engine, &DateRange::single(date(2026, 2, 2)), &source).unwrap();
    assert_eq!(quiet.days[0].tier, OccupancyTier::Low);
    assert_eq!(quiet.summary.low_demand_days, 1);
}

#[rstest]
#[case(dec!(0.96), OccupancyTier::SoldOut)]
#[case(dec!(0.95), OccupancyTier::VeryHigh)]
#[case(dec!(0.85), OccupancyTier::High)]
#[case(dec!(0.70), OccupancyTier::Moderate)]
#[case(dec!(0.50), OccupancyTier::Low)]
fn test_occupancy_tier_bands(#[case] occupancy: Decimal, #[case] expected: OccupancyTier) {
    assert_eq!(OccupancyTier::for_occupancy(occupancy), expected);
}

proptest! {
    /// Higher occupancy never lowers the recommended rate.
    #[test]
    fn prop_monotone_in_occupancy(
        offset in 0i64..365,
        low in 0i64..=100,
        bump in 0i64..=100,
        lead in 0u32..120,
    ) {
        let hotel = HotelConfig::default();
        let pricing = PricingConfig::default();
        let engine = PricingEngine::new(&hotel, &pricing);
        let source = StaticMarketSource::new(&pricing, &hotel);
        let day = date(2026, 1, 1) + Duration::days(offset);
        let high = (low + bump).min(100);

        let price = |occupancy: i64| {
            let request = PricingRequest {
                occupancy: Some(Decimal::new(occupancy, 2)),
                lead_days: lead,
                ..single(day)
            };
            engine.optimize(&request, &source).unwrap().days[0].recommended_rate
        };

        prop_assert!(price(low) <= price(high));
    }

    /// The recommended rate never exceeds a binding competitor cap.
    #[test]
    fn prop_never_exceeds_cap(
        offset in 0i64..365,
        competitor in 50i64..400,
        occupancy in 0i64..=100,
    ) {
        let hotel = HotelConfig::default();
        let pricing = PricingConfig::default();
        let engine = PricingEngine::new(&hotel, &pricing);
        let competitor = Decimal::from(competitor);
        let request = PricingRequest {
            occupancy: Some(Decimal::new(occupancy, 2)),
            competitor_rate: Some(competitor),
            ..single(date(2026, 1, 1) + Duration::days(offset))
        };

        let report = engine.optimize(&request, &OfflineSource).unwrap();
        let cap = truncate_cents(competitor * dec!(1.15));
        prop_assert!(report.days[0].recommended_rate <= cap);
    }

    /// Every demand factor stays inside its clamp range.
    #[test]
    fn prop_factors_clamped(offset in 0i64..365, occupancy in 0i64..=100, lead in 0u32..500) {
        let hotel = HotelConfig::default();
        let pricing = PricingConfig::default();
        let engine = PricingEngine::new(&hotel, &pricing);
        let request = PricingRequest {
            occupancy: Some(Decimal::new(occupancy, 2)),
            lead_days: lead,
            ..single(date(2026, 1, 1) + Duration::days(offset))
        };

        let day = &engine.optimize(&request, &OfflineSource).unwrap().days[0];
        let f = day.factors;
        for factor in [f.occupancy, f.day_of_week, f.seasonality, f.lead_time, f.event] {
            prop_assert!(factor >= dec!(0.75) && factor <= dec!(1.60));
        }
        prop_assert_eq!(f.competitor, Decimal::ONE);
        prop_assert!(day.recommended_rate >= dec!(99) && day.recommended_rate <= dec!(449));
    }
}
