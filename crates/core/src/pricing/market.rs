//! Market data sources.
//!
//! The pricing engine never talks to a feed directly. It asks a
//! [`MarketSource`] for a snapshot covering the requested range and falls
//! back to configuration values when the source reports itself unavailable.

use cashcast_shared::types::{round_cents, round_ratio};
use cashcast_shared::{Currency, HotelConfig, PricingConfig, SeasonalityTable};
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use thiserror::Error;

use super::pms::{InventoryDay, PmsRate};
use crate::calendar::{DateRange, SeasonalFactors, strongest_event};

/// Market source failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source could not produce data.
    #[error("Market source '{provider}' unavailable: {reason}")]
    Unavailable {
        /// Source name.
        provider: String,
        /// Failure description.
        reason: String,
    },
}

/// A competitor's rate on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitorRate {
    /// Property name.
    pub name: String,
    /// Nightly rate.
    pub rate: Decimal,
}

/// Event reported by a market source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketEvent {
    /// Event name.
    pub name: String,
    /// Signed demand impact fraction.
    pub impact: Decimal,
}

/// Market data for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketDay {
    /// Day described.
    pub date: NaiveDate,
    /// Competitor rates.
    pub competitor_rates: Vec<CompetitorRate>,
    /// Observed on-the-books occupancy, if the source knows it.
    pub occupancy: Option<Decimal>,
    /// Strongest local event, if any.
    pub event: Option<MarketEvent>,
}

impl MarketDay {
    /// Mean competitor rate, `None` when no rates were reported or their
    /// sum cannot be represented.
    #[must_use]
    pub fn competitor_average(&self) -> Option<Decimal> {
        if self.competitor_rates.is_empty() {
            return None;
        }
        let total = self
            .competitor_rates
            .iter()
            .try_fold(Decimal::ZERO, |acc, c| acc.checked_add(c.rate))?;
        Some(total / Decimal::from(self.competitor_rates.len()))
    }
}

/// Market data for a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketSnapshot {
    /// Source name.
    pub provider: String,
    /// One entry per day in the requested range.
    pub days: Vec<MarketDay>,
}

impl MarketSnapshot {
    /// Data for `date`, if present.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&MarketDay> {
        self.days.iter().find(|day| day.date == date)
    }
}

/// Provider of competitor rates, occupancy, and events.
pub trait MarketSource: Send + Sync {
    /// Source name used in reports and logs.
    fn name(&self) -> &str;

    /// Fetches market data covering `range`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the source cannot answer.
    fn fetch(&self, range: &DateRange) -> Result<MarketSnapshot, SourceError>;

    /// Rates loaded in the property management system for `rate_code`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the source has no PMS link,
    /// which is the default.
    fn pms_rates(
        &self,
        _range: &DateRange,
        _rate_code: &str,
    ) -> Result<Vec<PmsRate>, SourceError> {
        Err(no_pms(self.name()))
    }

    /// Room inventory from the property management system.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the source has no PMS link,
    /// which is the default.
    fn inventory(&self, _range: &DateRange) -> Result<Vec<InventoryDay>, SourceError> {
        Err(no_pms(self.name()))
    }
}

fn no_pms(provider: &str) -> SourceError {
    SourceError::Unavailable {
        provider: provider.to_string(),
        reason: "no property management system connected".to_string(),
    }
}

/// Configuration-backed source with deterministic competitor rates.
///
/// Each competitor's rate is its reference rate moved by the weekday
/// adjustment and the strongest event impact of the day. The PMS view
/// loads the average daily rate (20% higher Friday to Sunday) and books
/// the average occupancy scaled by the day's seasonal multiplier.
#[derive(Debug, Clone)]
pub struct StaticMarketSource {
    pricing: PricingConfig,
    seasonality: SeasonalityTable,
    room_count: u32,
    base_rate: Decimal,
    occupancy: Decimal,
    currency: Currency,
}

impl StaticMarketSource {
    /// Source name.
    pub const NAME: &'static str = "static-config";

    /// Room type reported for PMS rates.
    pub const ROOM_TYPE: &'static str = "STD";

    /// Builds a source from the pricing tables and hotel calendar.
    #[must_use]
    pub fn new(pricing: &PricingConfig, hotel: &HotelConfig) -> Self {
        Self {
            pricing: pricing.clone(),
            seasonality: hotel.seasonality.clone(),
            room_count: hotel.room_count,
            base_rate: hotel.avg_daily_rate,
            occupancy: hotel.avg_occupancy,
            currency: hotel.currency,
        }
    }

    fn pms_rate(&self, date: NaiveDate, rate_code: &str) -> PmsRate {
        let amount = match date.weekday() {
            Weekday::Fri | Weekday::Sat | Weekday::Sun => self.base_rate * Decimal::new(120, 2),
            _ => self.base_rate,
        };

        PmsRate {
            date,
            rate_code: rate_code.to_string(),
            room_type: Self::ROOM_TYPE.to_string(),
            amount: round_cents(amount),
            currency: self.currency,
        }
    }

    fn inventory_day(&self, date: NaiveDate) -> InventoryDay {
        let multiplier = SeasonalFactors::for_date(&self.seasonality, date).multiplier();
        let booked = (self.occupancy * multiplier).clamp(Decimal::ZERO, Decimal::ONE);
        let rooms = Decimal::from(self.room_count);

        let available = (rooms * (Decimal::ONE - booked))
            .floor()
            .to_u32()
            .unwrap_or(0)
            .min(self.room_count);
        let occupied = self.room_count - available;
        let occupancy = if self.room_count == 0 {
            Decimal::ZERO
        } else {
            round_ratio(Decimal::from(occupied) / rooms)
        };

        InventoryDay {
            date,
            total_rooms: self.room_count,
            available,
            occupied,
            occupancy,
        }
    }

    fn day(&self, date: NaiveDate) -> MarketDay {
        let event = strongest_event(&self.seasonality, date);
        let event_impact = event.map_or(Decimal::ZERO, |e| e.impact);
        let weekday_adjustment = self.pricing.weekday_adjustment(date.weekday());

        let competitor_rates = self
            .pricing
            .competitors
            .iter()
            .map(|profile| CompetitorRate {
                name: profile.name.clone(),
                rate: round_cents(
                    profile.base_rate * (Decimal::ONE + weekday_adjustment + event_impact),
                ),
            })
            .collect();

        MarketDay {
            date,
            competitor_rates,
            occupancy: None,
            event: event.map(|e| MarketEvent {
                name: e.name.clone(),
                impact: e.impact,
            }),
        }
    }
}

impl MarketSource for StaticMarketSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn fetch(&self, range: &DateRange) -> Result<MarketSnapshot, SourceError> {
        if self.pricing.competitors.is_empty() {
            return Err(SourceError::Unavailable {
                provider: Self::NAME.to_string(),
                reason: "no competitors configured".to_string(),
            });
        }

        Ok(MarketSnapshot {
            provider: Self::NAME.to_string(),
            days: range.iter().map(|date| self.day(date)).collect(),
        })
    }

    fn pms_rates(
        &self,
        range: &DateRange,
        rate_code: &str,
    ) -> Result<Vec<PmsRate>, SourceError> {
        Ok(range.iter().map(|date| self.pms_rate(date, rate_code)).collect())
    }

    fn inventory(&self, range: &DateRange) -> Result<Vec<InventoryDay>, SourceError> {
        Ok(range.iter().map(|date| self.inventory_day(date)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_static_rates_follow_weekday_and_event() {
        let source = StaticMarketSource::new(&PricingConfig::default(), &HotelConfig::default());
        // Saturday 2026-02-14, Valentine's Day (+25%), Saturday (+25%).
        let snapshot = source.fetch(&DateRange::single(date(2026, 2, 14))).unwrap();
        let day = &snapshot.days[0];

        assert_eq!(day.competitor_rates.len(), 4);
        assert_eq!(day.competitor_rates[0].name, "Marriott Downtown");
        assert_eq!(day.competitor_rates[0].rate, dec!(298.50));
        assert_eq!(day.event.as_ref().unwrap().name, "Valentine's Day");
    }

    #[test]
    fn test_static_source_is_deterministic() {
        let source = StaticMarketSource::new(&PricingConfig::default(), &HotelConfig::default());
        let range = DateRange::new(date(2026, 7, 1), date(2026, 7, 31)).unwrap();
        assert_eq!(source.fetch(&range).unwrap(), source.fetch(&range).unwrap());
    }

    #[test]
    fn test_competitor_average() {
        let source = StaticMarketSource::new(&PricingConfig::default(), &HotelConfig::default());
        // Sunday 2026-03-01: no weekday adjustment, no event.
        let snapshot = source.fetch(&DateRange::single(date(2026, 3, 1))).unwrap();
        assert_eq!(snapshot.days[0].competitor_average(), Some(dec!(197)));
    }

    #[test]
    fn test_static_pms_rates_carry_weekend_premium() {
        let source = StaticMarketSource::new(&PricingConfig::default(), &HotelConfig::default());
        // Thursday 2026-03-05 through Sunday 2026-03-08.
        let range = DateRange::new(date(2026, 3, 5), date(2026, 3, 8)).unwrap();
        let rates = source.pms_rates(&range, "BAR").unwrap();

        let amounts: Vec<Decimal> = rates.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, [dec!(189.00), dec!(226.80), dec!(226.80), dec!(226.80)]);
        assert!(rates.iter().all(|r| r.rate_code == "BAR" && r.room_type == "STD"));
    }

    #[test]
    fn test_static_inventory_follows_seasonality() {
        let source = StaticMarketSource::new(&PricingConfig::default(), &HotelConfig::default());

        // Neutral Wednesday: 75% booked, 62.5 rooms free rounds down to 62.
        let neutral = &source.inventory(&DateRange::single(date(2026, 3, 4))).unwrap()[0];
        assert_eq!(neutral.total_rooms, 250);
        assert_eq!(neutral.available, 62);
        assert_eq!(neutral.occupied, 188);
        assert_eq!(neutral.occupancy, dec!(0.752));

        // February Monday carries the 0.65 low-season multiplier.
        let quiet = &source.inventory(&DateRange::single(date(2026, 2, 2))).unwrap()[0];
        assert_eq!(quiet.available, 128);
        assert_eq!(quiet.occupied, 122);
        assert_eq!(quiet.occupancy, dec!(0.488));
    }

    #[test]
    fn test_empty_competitor_set_is_unavailable() {
        let pricing = PricingConfig {
            competitors: Vec::new(),
            ..PricingConfig::default()
        };
        let source = StaticMarketSource::new(&pricing, &HotelConfig::default());
        let err = source.fetch(&DateRange::single(date(2026, 3, 1))).unwrap_err();
        assert!(matches!(err, SourceError::Unavailable { .. }));
    }
}
