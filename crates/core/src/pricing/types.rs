//! Pricing data types.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;

use super::factors::PriceFactors;
use crate::calendar::DateRange;

/// Parameters for one optimization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRequest {
    /// Priced range.
    pub range: DateRange,
    /// Occupancy estimate as a fraction; defaults to market or configured occupancy.
    pub occupancy: Option<Decimal>,
    /// Days between booking and arrival.
    pub lead_days: u32,
    /// Competitor rate that overrides the market source.
    pub competitor_rate: Option<Decimal>,
}

impl PricingRequest {
    /// Request with default occupancy, same-day lead time, and market competitor data.
    #[must_use]
    pub const fn new(range: DateRange) -> Self {
        Self {
            range,
            occupancy: None,
            lead_days: 0,
            competitor_rate: None,
        }
    }
}

/// Where the competitor data for a run came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MarketDataStatus {
    /// Data supplied by the market source.
    Live {
        /// Source name.
        provider: String,
    },
    /// Competitor rate supplied with the request.
    Override,
    /// Source failed; configuration values used and no competitor cap applied.
    Fallback {
        /// Source name.
        provider: String,
        /// Failure description.
        reason: String,
    },
}

/// Recommended rate for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRecommendation {
    /// Priced day.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Configured average daily rate.
    pub base_rate: Decimal,
    /// Occupancy used for the occupancy factor.
    pub occupancy: Decimal,
    /// Lead time used for the lead-time factor.
    pub lead_days: u32,
    /// Rate factors.
    pub factors: PriceFactors,
    /// Base rate times the demand factors, before bounds.
    pub raw_rate: Decimal,
    /// Final nightly rate.
    pub recommended_rate: Decimal,
    /// Recommended rate relative to base, as a fraction.
    pub total_adjustment: Decimal,
    /// Competitor reference rate, if known.
    pub competitor_rate: Option<Decimal>,
    /// Competitor rate plus the allowed premium.
    pub competitor_cap: Option<Decimal>,
    /// True if the competitor cap lowered the rate.
    pub competitor_cap_applied: bool,
    /// Event influencing the day.
    pub event: Option<String>,
    /// Rooms expected to sell.
    pub projected_rooms: Decimal,
    /// Revenue at the base rate.
    pub base_revenue: Decimal,
    /// Revenue at the recommended rate.
    pub optimized_revenue: Decimal,
    /// Optimized minus base revenue.
    pub revenue_uplift: Decimal,
}

/// Inputs echoed back with a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingParameters {
    /// Configured average daily rate.
    pub base_rate: Decimal,
    /// Rate floor.
    pub min_rate: Decimal,
    /// Rate ceiling.
    pub max_rate: Decimal,
    /// Allowed premium over competitors.
    pub competitor_premium: Decimal,
    /// Requested occupancy override.
    pub occupancy: Option<Decimal>,
    /// Requested lead time.
    pub lead_days: u32,
    /// Requested competitor rate override.
    pub competitor_rate: Option<Decimal>,
}

/// Range-level pricing totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingSummary {
    /// Number of priced days.
    pub days: usize,
    /// Configured average daily rate.
    pub avg_base_rate: Decimal,
    /// Mean recommended rate.
    pub avg_recommended_rate: Decimal,
    /// Sum of projected rooms.
    pub projected_room_nights: Decimal,
    /// Revenue at the base rate.
    pub total_base_revenue: Decimal,
    /// Revenue at recommended rates.
    pub total_optimized_revenue: Decimal,
    /// Optimized minus base revenue.
    pub total_uplift: Decimal,
    /// Uplift as a percentage of base revenue; `None` when base revenue is zero.
    pub uplift_percent: Option<Decimal>,
    /// Days on which the competitor cap applied.
    pub days_capped: usize,
}

/// Result of a pricing optimization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingReport {
    /// Hotel display name.
    pub hotel_name: String,
    /// Priced range.
    pub range: DateRange,
    /// Inputs used.
    pub parameters: PricingParameters,
    /// Competitor data provenance.
    pub market: MarketDataStatus,
    /// Range totals.
    pub summary: PricingSummary,
    /// Daily recommendations in chronological order.
    pub days: Vec<PriceRecommendation>,
}
