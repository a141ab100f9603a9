//! Individual rate factors.

use cashcast_shared::PricingConfig;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// The six pricing multipliers for one day.
///
/// The five demand factors are clamped to the configured bounds. The
/// competitor factor is the exact cut applied by a binding cap, so it can
/// fall below the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceFactors {
    /// Occupancy tier factor.
    pub occupancy: Decimal,
    /// Day-of-week factor.
    pub day_of_week: Decimal,
    /// Monthly season factor.
    pub seasonality: Decimal,
    /// Booking lead-time factor.
    pub lead_time: Decimal,
    /// Local event factor.
    pub event: Decimal,
    /// Cap divided by the bounded rate when the cap binds, otherwise 1.
    pub competitor: Decimal,
}

impl PriceFactors {
    /// Computes the calendar and demand factors; the competitor factor starts at 1.
    #[must_use]
    pub fn compute(
        pricing: &PricingConfig,
        date: NaiveDate,
        occupancy: Decimal,
        lead_days: u32,
        event_impact: Decimal,
    ) -> Self {
        let clamp = |adjustment: Decimal| clamp_factor(pricing, adjustment);

        Self {
            occupancy: clamp(
                pricing
                    .occupancy_tier(occupancy)
                    .map_or(Decimal::ZERO, |tier| tier.adjustment),
            ),
            day_of_week: clamp(pricing.weekday_adjustment(date.weekday())),
            seasonality: clamp(pricing.month_adjustment(date.month())),
            lead_time: clamp(
                pricing
                    .lead_time_tier(lead_days)
                    .map_or(Decimal::ZERO, |tier| tier.adjustment),
            ),
            event: clamp(event_impact),
            competitor: Decimal::ONE,
        }
    }

    /// Product of the five demand factors (excludes the competitor factor).
    #[must_use]
    pub fn demand_multiplier(&self) -> Decimal {
        self.occupancy * self.day_of_week * self.seasonality * self.lead_time * self.event
    }
}

/// `1 + adjustment`, clamped to the configured factor bounds.
#[must_use]
pub fn clamp_factor(pricing: &PricingConfig, adjustment: Decimal) -> Decimal {
    (Decimal::ONE + adjustment).clamp(pricing.factor_floor, pricing.factor_ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(-0.40), dec!(0.75))]
    #[case(dec!(-0.25), dec!(0.75))]
    #[case(dec!(0.10), dec!(1.10))]
    #[case(dec!(0.60), dec!(1.60))]
    #[case(dec!(0.95), dec!(1.60))]
    fn test_clamp_factor(#[case] adjustment: Decimal, #[case] expected: Decimal) {
        assert_eq!(clamp_factor(&PricingConfig::default(), adjustment), expected);
    }

    #[test]
    fn test_saturday_in_december() {
        // 2026-12-19 is a Saturday.
        let date = NaiveDate::from_ymd_opt(2026, 12, 19).unwrap();
        let factors =
            PriceFactors::compute(&PricingConfig::default(), date, dec!(0.90), 10, dec!(0));
        assert_eq!(factors.occupancy, dec!(1.30));
        assert_eq!(factors.day_of_week, dec!(1.25));
        assert_eq!(factors.seasonality, dec!(1.35));
        assert_eq!(factors.lead_time, dec!(1.00));
        assert_eq!(factors.event, dec!(1));
        assert_eq!(factors.competitor, dec!(1));
        assert_eq!(factors.demand_multiplier(), dec!(1.30) * dec!(1.25) * dec!(1.35));
    }
}
