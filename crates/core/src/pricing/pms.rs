//! Read-only views over the property management system (PMS).
//!
//! Rates and inventory come from the [`MarketSource`]; the engine adds
//! its own recommendation for each day so the two can be compared.

use cashcast_shared::Currency;
use cashcast_shared::types::{round_cents, round_ratio};
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;

use super::engine::PricingEngine;
use super::error::PricingError;
use super::market::MarketSource;
use crate::calendar::DateRange;

/// Rate code used when none is given.
pub const DEFAULT_RATE_CODE: &str = "BAR";

/// Rate loaded in the PMS for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PmsRate {
    /// Stay date.
    pub date: NaiveDate,
    /// Rate plan code (e.g. "BAR").
    pub rate_code: String,
    /// Room type code.
    pub room_type: String,
    /// Nightly amount.
    pub amount: Decimal,
    /// Currency of `amount`.
    pub currency: Currency,
}

/// Room inventory for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryDay {
    /// Stay date.
    pub date: NaiveDate,
    /// Sellable rooms.
    pub total_rooms: u32,
    /// Rooms still available.
    pub available: u32,
    /// Rooms on the books.
    pub occupied: u32,
    /// Occupied share of total rooms.
    pub occupancy: Decimal,
}

// ============================================================================
// Rate comparison
// ============================================================================

/// What to do with a PMS rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateAction {
    /// Recommended rate is more than 2% above the PMS rate.
    Increase,
    /// Recommended rate is more than 2% below the PMS rate.
    Decrease,
    /// Within 2% either way.
    Ok,
}

impl RateAction {
    /// Classifies the gap between `recommended` and `current`.
    #[must_use]
    pub fn classify(recommended: Decimal, current: Decimal) -> Self {
        if recommended > current * Decimal::new(102, 2) {
            Self::Increase
        } else if recommended < current * Decimal::new(98, 2) {
            Self::Decrease
        } else {
            Self::Ok
        }
    }
}

/// PMS rate against the recommended rate for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateComparisonDay {
    /// Stay date.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Rate loaded in the PMS.
    pub pms_rate: Decimal,
    /// Engine recommendation at configured occupancy, same-day lead time.
    pub recommended_rate: Decimal,
    /// Recommended minus PMS rate.
    pub difference: Decimal,
    /// Difference as a percentage of the PMS rate; `None` for a zero PMS rate.
    pub difference_percent: Option<Decimal>,
    /// Suggested action.
    pub action: RateAction,
}

/// Counts and averages over a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateComparisonSummary {
    /// Compared days.
    pub days: usize,
    /// Days marked `INCREASE`.
    pub rates_to_increase: usize,
    /// Days marked `DECREASE`.
    pub rates_to_decrease: usize,
    /// Days marked `OK`.
    pub rates_ok: usize,
    /// Mean PMS rate.
    pub avg_pms_rate: Decimal,
    /// Mean recommended rate.
    pub avg_recommended_rate: Decimal,
    /// Positive differences averaged over all days.
    pub potential_daily_uplift: Decimal,
}

/// PMS rates compared with recommendations over a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateComparison {
    /// Hotel display name.
    pub hotel_name: String,
    /// PMS property identifier.
    pub property_id: String,
    /// Source that supplied the rates.
    pub provider: String,
    /// Compared range.
    pub range: DateRange,
    /// Rate plan compared.
    pub rate_code: String,
    /// Totals.
    pub summary: RateComparisonSummary,
    /// One entry per PMS rate, in date order.
    pub days: Vec<RateComparisonDay>,
}

/// Fetches PMS rates for `range` and compares each with the recommended rate.
///
/// # Errors
///
/// Returns `PricingError::InvalidRateCode` for a blank rate code and
/// `PricingError::SourceUnavailable` if the source has no PMS data.
pub fn compare_pms_rates(
    engine: &PricingEngine<'_>,
    range: &DateRange,
    rate_code: &str,
    source: &dyn MarketSource,
) -> Result<RateComparison, PricingError> {
    let rate_code = rate_code.trim().to_ascii_uppercase();
    if rate_code.is_empty() {
        return Err(PricingError::InvalidRateCode(rate_code));
    }

    let mut rates = source.pms_rates(range, &rate_code)?;
    rates.sort_by_key(|rate| rate.date);

    let hotel = engine.hotel();
    let days: Vec<RateComparisonDay> = rates
        .iter()
        .map(|rate| {
            let recommended = engine
                .price_day(
                    rate.date,
                    hotel.avg_occupancy,
                    0,
                    None,
                    engine.calendar_event(rate.date),
                )
                .recommended_rate;
            let difference = recommended - rate.amount;

            RateComparisonDay {
                date: rate.date,
                weekday: rate.date.weekday(),
                pms_rate: rate.amount,
                recommended_rate: recommended,
                difference,
                difference_percent: (rate.amount > Decimal::ZERO)
                    .then(|| difference.checked_div(rate.amount))
                    .flatten()
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                    .map(round_cents),
                action: RateAction::classify(recommended, rate.amount),
            }
        })
        .collect();

    let count = |action: RateAction| days.iter().filter(|d| d.action == action).count();
    let uplift: Decimal = days
        .iter()
        .map(|d| d.difference)
        .filter(|d| *d > Decimal::ZERO)
        .sum();

    Ok(RateComparison {
        hotel_name: hotel.hotel_name.clone(),
        property_id: hotel.pms_property_id.clone(),
        provider: source.name().to_string(),
        range: *range,
        rate_code,
        summary: RateComparisonSummary {
            days: days.len(),
            rates_to_increase: count(RateAction::Increase),
            rates_to_decrease: count(RateAction::Decrease),
            rates_ok: count(RateAction::Ok),
            avg_pms_rate: mean(days.iter().map(|d| d.pms_rate)),
            avg_recommended_rate: mean(days.iter().map(|d| d.recommended_rate)),
            potential_daily_uplift: mean_over(uplift, days.len()),
        },
        days,
    })
}

// ============================================================================
// Inventory
// ============================================================================

/// Demand band for an occupancy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyTier {
    /// Above 95%.
    SoldOut,
    /// Above 85%.
    VeryHigh,
    /// Above 70%.
    High,
    /// Above 50%.
    Moderate,
    /// 50% or less.
    Low,
}

impl OccupancyTier {
    /// Band for an occupancy fraction.
    #[must_use]
    pub fn for_occupancy(occupancy: Decimal) -> Self {
        if occupancy > Decimal::new(95, 2) {
            Self::SoldOut
        } else if occupancy > Decimal::new(85, 2) {
            Self::VeryHigh
        } else if occupancy > Decimal::new(70, 2) {
            Self::High
        } else if occupancy > Decimal::new(50, 2) {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Inventory for one day with a rate recommendation at that occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRecommendation {
    /// Stay date.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Sellable rooms.
    pub total_rooms: u32,
    /// Rooms still available.
    pub available: u32,
    /// Rooms on the books.
    pub occupied: u32,
    /// Occupied share of total rooms.
    pub occupancy: Decimal,
    /// Demand band.
    pub tier: OccupancyTier,
    /// Recommended rate at this occupancy, same-day lead time.
    pub recommended_rate: Decimal,
    /// Recommended rate relative to base, as a fraction.
    pub rate_adjustment: Decimal,
}

/// Inventory totals over a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    /// Days reported.
    pub days: usize,
    /// Sum of sellable rooms.
    pub total_room_nights: u64,
    /// Sum of available rooms.
    pub total_available: u64,
    /// Sum of occupied rooms.
    pub total_occupied: u64,
    /// Mean occupancy fraction.
    pub avg_occupancy: Decimal,
    /// Days above 85% occupancy.
    pub high_demand_days: usize,
    /// Days below 50% occupancy.
    pub low_demand_days: usize,
}

/// PMS inventory with per-day rate recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryOutlook {
    /// Hotel display name.
    pub hotel_name: String,
    /// PMS property identifier.
    pub property_id: String,
    /// Source that supplied the inventory.
    pub provider: String,
    /// Reported range.
    pub range: DateRange,
    /// Totals.
    pub summary: InventorySummary,
    /// One entry per inventory day, in date order.
    pub days: Vec<InventoryRecommendation>,
}

/// Fetches PMS inventory for `range` and prices each day at its occupancy.
///
/// # Errors
///
/// Returns `PricingError::SourceUnavailable` if the source has no PMS data.
pub fn inventory_outlook(
    engine: &PricingEngine<'_>,
    range: &DateRange,
    source: &dyn MarketSource,
) -> Result<InventoryOutlook, PricingError> {
    let mut inventory = source.inventory(range)?;
    inventory.sort_by_key(|day| day.date);

    let days: Vec<InventoryRecommendation> = inventory
        .iter()
        .map(|day| {
            let occupancy = day.occupancy.clamp(Decimal::ZERO, Decimal::ONE);
            let priced =
                engine.price_day(day.date, occupancy, 0, None, engine.calendar_event(day.date));

            InventoryRecommendation {
                date: day.date,
                weekday: day.date.weekday(),
                total_rooms: day.total_rooms,
                available: day.available,
                occupied: day.occupied,
                occupancy,
                tier: OccupancyTier::for_occupancy(occupancy),
                recommended_rate: priced.recommended_rate,
                rate_adjustment: priced.total_adjustment,
            }
        })
        .collect();

    let hotel = engine.hotel();
    let avg_occupancy = if days.is_empty() {
        Decimal::ZERO
    } else {
        let total: Decimal = days.iter().map(|d| d.occupancy).sum();
        round_ratio(total / Decimal::from(days.len()))
    };

    Ok(InventoryOutlook {
        hotel_name: hotel.hotel_name.clone(),
        property_id: hotel.pms_property_id.clone(),
        provider: source.name().to_string(),
        range: *range,
        summary: InventorySummary {
            days: days.len(),
            total_room_nights: days.iter().map(|d| u64::from(d.total_rooms)).sum(),
            total_available: days.iter().map(|d| u64::from(d.available)).sum(),
            total_occupied: days.iter().map(|d| u64::from(d.occupied)).sum(),
            avg_occupancy,
            high_demand_days: days
                .iter()
                .filter(|d| d.occupancy > Decimal::new(85, 2))
                .count(),
            low_demand_days: days
                .iter()
                .filter(|d| d.occupancy < Decimal::new(50, 2))
                .count(),
        },
        days,
    })
}

fn mean(values: impl Iterator<Item = Decimal>) -> Decimal {
    let (total, count) = values.fold((Decimal::ZERO, 0usize), |(sum, n), v| (sum + v, n + 1));
    mean_over(total, count)
}

fn mean_over(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    round_cents(total / Decimal::from(count))
}
