//! Competitor rate comparison for a single day.

use cashcast_shared::types::round_cents;
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;

use super::engine::PricingEngine;
use super::error::PricingError;
use super::market::{CompetitorRate, MarketSource};
use crate::calendar::DateRange;

/// Where our rate sits relative to the market average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    /// Above the average.
    Premium,
    /// Below the average.
    Value,
    /// Equal to the average.
    Market,
}

/// Our base and recommended rate for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OurPricing {
    /// Configured average daily rate.
    pub base_rate: Decimal,
    /// Recommended rate without a competitor cap.
    pub recommended_rate: Decimal,
    /// Recommended rate relative to base, as a fraction.
    pub adjustment: Decimal,
}

/// Spread of competitor rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketStats {
    /// Mean competitor rate.
    pub average: Decimal,
    /// Lowest competitor rate.
    pub minimum: Decimal,
    /// Highest competitor rate.
    pub maximum: Decimal,
    /// Highest minus lowest.
    pub spread: Decimal,
}

/// Our position in the market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketPosition {
    /// Our rate minus the market average.
    pub vs_average: Decimal,
    /// Difference as a percentage of the average.
    pub vs_average_pct: Decimal,
    /// 1-based rank among competitors, highest rate first.
    pub rank: usize,
    /// Positioning label.
    pub positioning: Positioning,
}

/// Event running on the analyzed day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventImpact {
    /// Event name.
    pub name: String,
    /// Signed demand impact fraction.
    pub impact: Decimal,
}

/// Competitor analysis for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitorAnalysis {
    /// Hotel display name.
    pub hotel_name: String,
    /// Analyzed day.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Market source name.
    pub provider: String,
    /// Our pricing.
    pub our_pricing: OurPricing,
    /// Competitor rates.
    pub competitor_rates: Vec<CompetitorRate>,
    /// Market statistics.
    pub market: MarketStats,
    /// Our position.
    pub position: MarketPosition,
    /// Event, if any.
    pub event: Option<EventImpact>,
    /// Plain-language recommendations.
    pub recommendations: Vec<String>,
}

/// Compares our recommended rate for `date` with the market.
///
/// # Errors
///
/// Returns `PricingError::SourceUnavailable` if the source fails and
/// `PricingError::NoCompetitorData` if it has no rates for the date.
pub fn analyze_competitors(
    engine: &PricingEngine<'_>,
    date: NaiveDate,
    source: &dyn MarketSource,
) -> Result<CompetitorAnalysis, PricingError> {
    let snapshot = source.fetch(&DateRange::single(date))?;
    let day = snapshot
        .day(date)
        .filter(|day| !day.competitor_rates.is_empty())
        .ok_or(PricingError::NoCompetitorData(date))?;

    let hotel = engine.hotel();
    let event = engine.calendar_event(date);
    let ours = engine.price_day(date, hotel.avg_occupancy, 0, None, event.clone());
    let rate = ours.recommended_rate;

    let rates: Vec<Decimal> = day.competitor_rates.iter().map(|c| c.rate).collect();
    let average = day
        .competitor_average()
        .map(round_cents)
        .filter(|average| *average > Decimal::ZERO)
        .ok_or(PricingError::NoCompetitorData(date))?;
    let minimum = rates.iter().copied().min().unwrap_or(average);
    let maximum = rates.iter().copied().max().unwrap_or(average);

    let positioning = match rate.cmp(&average) {
        std::cmp::Ordering::Greater => Positioning::Premium,
        std::cmp::Ordering::Less => Positioning::Value,
        std::cmp::Ordering::Equal => Positioning::Market,
    };

    let mut recommendations = Vec::new();
    if rate > maximum * Decimal::new(11, 1) {
        recommendations.push(
            "Rate significantly above market - consider reducing to maintain competitiveness"
                .to_string(),
        );
    } else if rate < minimum * Decimal::new(9, 1) {
        recommendations.push("Rate below market floor - opportunity to increase rates".to_string());
    } else {
        recommendations.push("Rate well-positioned within market range".to_string());
    }
    if let Some(event) = &event {
        recommendations.push(format!(
            "Event '{}' - ensure rate captures demand surge",
            event.name
        ));
    }

    Ok(CompetitorAnalysis {
        hotel_name: hotel.hotel_name.clone(),
        date,
        weekday: date.weekday(),
        provider: snapshot.provider.clone(),
        our_pricing: OurPricing {
            base_rate: hotel.avg_daily_rate,
            recommended_rate: rate,
            adjustment: ours.total_adjustment,
        },
        competitor_rates: day.competitor_rates.clone(),
        market: MarketStats {
            average,
            minimum,
            maximum,
            spread: maximum - minimum,
        },
        position: MarketPosition {
            vs_average: rate - average,
            vs_average_pct: round_cents((rate - average) / average * Decimal::ONE_HUNDRED),
            rank: 1 + rates.iter().filter(|competitor| **competitor > rate).count(),
            positioning,
        },
        event: event.map(|e| EventImpact {
            name: e.name,
            impact: e.impact,
        }),
        recommendations,
    })
}
