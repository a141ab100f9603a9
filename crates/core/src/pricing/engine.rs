//! Dynamic pricing engine.

use cashcast_shared::types::{round_cents, round_ratio, truncate_cents};
use cashcast_shared::{HotelConfig, PricingConfig};
use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::PricingError;
use super::factors::PriceFactors;
use super::market::{MarketDay, MarketEvent, MarketSnapshot, MarketSource, SourceError};
use super::types::{
    MarketDataStatus, PriceRecommendation, PricingParameters, PricingReport, PricingRequest,
    PricingSummary,
};
use crate::calendar::strongest_event;

/// Computes recommended nightly rates.
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine<'a> {
    hotel: &'a HotelConfig,
    pricing: &'a PricingConfig,
}

impl<'a> PricingEngine<'a> {
    /// Creates a pricing engine.
    #[must_use]
    pub const fn new(hotel: &'a HotelConfig, pricing: &'a PricingConfig) -> Self {
        Self { hotel, pricing }
    }

    /// Hotel configuration.
    #[must_use]
    pub const fn hotel(&self) -> &'a HotelConfig {
        self.hotel
    }

    /// Prices every day of the request's range.
    ///
    /// A competitor rate in the request replaces the market source. If the
    /// source is unavailable, the run uses configuration values only and
    /// applies no competitor cap.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if the occupancy or competitor override is invalid.
    pub fn optimize(
        &self,
        request: &PricingRequest,
        source: &dyn MarketSource,
    ) -> Result<PricingReport, PricingError> {
        if let Some(occupancy) = request.occupancy {
            if occupancy < Decimal::ZERO || occupancy > Decimal::ONE {
                return Err(PricingError::InvalidOccupancy(occupancy));
            }
        }
        if let Some(rate) = request.competitor_rate {
            if rate <= Decimal::ZERO || self.competitor_cap(rate).is_none() {
                return Err(PricingError::InvalidCompetitorRate(rate));
            }
        }

        let (snapshot, market) = if request.competitor_rate.is_some() {
            (None, MarketDataStatus::Override)
        } else {
            match source.fetch(&request.range) {
                Ok(snapshot) => {
                    let status = MarketDataStatus::Live {
                        provider: snapshot.provider.clone(),
                    };
                    (Some(snapshot), status)
                }
                Err(SourceError::Unavailable { provider, reason }) => {
                    (None, MarketDataStatus::Fallback { provider, reason })
                }
            }
        };

        let days: Vec<PriceRecommendation> = request
            .range
            .iter()
            .map(|date| self.price_with_market(date, request, snapshot.as_ref()))
            .collect();

        Ok(PricingReport {
            hotel_name: self.hotel.hotel_name.clone(),
            range: request.range,
            parameters: PricingParameters {
                base_rate: self.hotel.avg_daily_rate,
                min_rate: self.pricing.min_rate,
                max_rate: self.pricing.max_rate,
                competitor_premium: self.pricing.competitor_premium,
                occupancy: request.occupancy,
                lead_days: request.lead_days,
                competitor_rate: request.competitor_rate,
            },
            market,
            summary: self.summarize(&days),
            days,
        })
    }

    fn price_with_market(
        &self,
        date: NaiveDate,
        request: &PricingRequest,
        snapshot: Option<&MarketSnapshot>,
    ) -> PriceRecommendation {
        let market_day = snapshot.and_then(|s| s.day(date));

        let occupancy = request
            .occupancy
            .or_else(|| market_day.and_then(|day| day.occupancy))
            .unwrap_or(self.hotel.avg_occupancy)
            .clamp(Decimal::ZERO, Decimal::ONE);

        let competitor_rate = request.competitor_rate.or_else(|| {
            market_day
                .and_then(MarketDay::competitor_average)
                .filter(|rate| *rate > Decimal::ZERO)
        });

        let event = match snapshot {
            Some(_) => market_day.and_then(|day| day.event.clone()),
            None => self.calendar_event(date),
        };

        self.price_day(date, occupancy, request.lead_days, competitor_rate, event)
    }

    /// Event from the hotel calendar for `date`.
    #[must_use]
    pub fn calendar_event(&self, date: NaiveDate) -> Option<MarketEvent> {
        strongest_event(&self.hotel.seasonality, date).map(|event| MarketEvent {
            name: event.name.clone(),
            impact: event.impact,
        })
    }

    /// Highest rate allowed against `competitor_rate`; `None` if it cannot be represented.
    #[must_use]
    pub fn competitor_cap(&self, competitor_rate: Decimal) -> Option<Decimal> {
        competitor_rate
            .checked_mul(Decimal::ONE + self.pricing.competitor_premium)
            .map(truncate_cents)
    }

    /// Prices a single day.
    #[must_use]
    pub fn price_day(
        &self,
        date: NaiveDate,
        occupancy: Decimal,
        lead_days: u32,
        competitor_rate: Option<Decimal>,
        event: Option<MarketEvent>,
    ) -> PriceRecommendation {
        let pricing = self.pricing;
        let base_rate = self.hotel.avg_daily_rate;
        let event_impact = event.as_ref().map_or(Decimal::ZERO, |e| e.impact);

        let mut factors = PriceFactors::compute(pricing, date, occupancy, lead_days, event_impact);
        let raw_rate = base_rate * factors.demand_multiplier();
        let bounded = raw_rate.clamp(pricing.min_rate, pricing.max_rate);

        let competitor_cap = competitor_rate.and_then(|rate| self.competitor_cap(rate));

        let (rate, cap_applied) = match competitor_cap {
            Some(cap) if bounded > cap => {
                factors.competitor = round_ratio(cap / bounded);
                (cap, true)
            }
            _ => (bounded, false),
        };

        let recommended_rate = round_cents(rate);
        let rooms_sold = Decimal::from(self.hotel.room_count) * occupancy;
        let base_revenue = round_cents(rooms_sold * base_rate);
        let optimized_revenue = round_cents(rooms_sold * recommended_rate);

        PriceRecommendation {
            date,
            weekday: date.weekday(),
            base_rate,
            occupancy,
            lead_days,
            factors,
            raw_rate: round_cents(raw_rate),
            recommended_rate,
            total_adjustment: round_ratio(recommended_rate / base_rate - Decimal::ONE),
            competitor_rate: competitor_rate.map(round_cents),
            competitor_cap,
            competitor_cap_applied: cap_applied,
            event: event.map(|e| e.name),
            projected_rooms: rooms_sold
                .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven),
            base_revenue,
            optimized_revenue,
            revenue_uplift: optimized_revenue - base_revenue,
        }
    }

    fn summarize(&self, days: &[PriceRecommendation]) -> PricingSummary {
        let total_base_revenue: Decimal = days.iter().map(|d| d.base_revenue).sum();
        let total_optimized_revenue: Decimal = days.iter().map(|d| d.optimized_revenue).sum();
        let total_uplift = total_optimized_revenue - total_base_revenue;

        let avg_recommended_rate = if days.is_empty() {
            Decimal::ZERO
        } else {
            let total: Decimal = days.iter().map(|d| d.recommended_rate).sum();
            round_cents(total / Decimal::from(days.len()))
        };

        let uplift_percent = (!total_base_revenue.is_zero())
            .then(|| round_cents(total_uplift / total_base_revenue * Decimal::ONE_HUNDRED));

        PricingSummary {
            days: days.len(),
            avg_base_rate: self.hotel.avg_daily_rate,
            avg_recommended_rate,
            projected_room_nights: days.iter().map(|d| d.projected_rooms).sum(),
            total_base_revenue,
            total_optimized_revenue,
            total_uplift,
            uplift_percent,
            days_capped: days.iter().filter(|d| d.competitor_cap_applied).count(),
        }
    }
}
