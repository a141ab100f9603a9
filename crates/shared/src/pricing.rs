//! Dynamic pricing tables.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rate adjustment tables and bounds for the pricing optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Occupancy tiers, ascending by `upper_bound`.
    pub occupancy_tiers: Vec<OccupancyTier>,
    /// Weekday rate adjustments.
    pub day_of_week: Vec<WeekdayRate>,
    /// Monthly rate adjustments.
    pub seasonality: Vec<MonthRate>,
    /// Booking lead-time tiers, ascending by `max_days`.
    pub lead_time_tiers: Vec<LeadTimeTier>,
    /// Absolute minimum nightly rate.
    pub min_rate: Decimal,
    /// Absolute maximum nightly rate.
    pub max_rate: Decimal,
    /// Allowed premium over the competitor average.
    pub competitor_premium: Decimal,
    /// Lower clamp applied to every individual factor.
    pub factor_floor: Decimal,
    /// Upper clamp applied to every individual factor.
    pub factor_ceiling: Decimal,
    /// Fallback competitor set used when no market source responds.
    pub competitors: Vec<CompetitorProfile>,
}

/// Occupancy band and its rate adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyTier {
    /// Tier name.
    pub name: String,
    /// Inclusive upper occupancy bound, as a fraction.
    pub upper_bound: Decimal,
    /// Signed adjustment fraction.
    pub adjustment: Decimal,
}

/// Weekday rate adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayRate {
    /// Day of the week.
    pub weekday: Weekday,
    /// Signed adjustment fraction.
    pub adjustment: Decimal,
}

/// Monthly rate adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRate {
    /// Month number, 1-12.
    pub month: u32,
    /// Signed adjustment fraction.
    pub adjustment: Decimal,
}

/// Lead-time band and its rate adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadTimeTier {
    /// Tier name.
    pub name: String,
    /// Inclusive upper bound in days before arrival.
    pub max_days: u32,
    /// Signed adjustment fraction.
    pub adjustment: Decimal,
}

/// A competing property and its reference nightly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorProfile {
    /// Property name.
    pub name: String,
    /// Reference nightly rate.
    pub base_rate: Decimal,
}

fn pct(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

impl Default for PricingConfig {
    fn default() -> Self {
        let occupancy_tiers = [
            ("very_low", 30, -25),
            ("low", 50, -15),
            ("moderate", 70, 0),
            ("high", 85, 15),
            ("very_high", 95, 30),
            ("sold_out", 100, 50),
        ]
        .into_iter()
        .map(|(name, bound, adj)| OccupancyTier {
            name: name.to_string(),
            upper_bound: pct(bound),
            adjustment: pct(adj),
        })
        .collect();

        let day_of_week = [
            (Weekday::Mon, -10),
            (Weekday::Tue, -12),
            (Weekday::Wed, -5),
            (Weekday::Thu, 5),
            (Weekday::Fri, 20),
            (Weekday::Sat, 25),
            (Weekday::Sun, 0),
        ]
        .into_iter()
        .map(|(weekday, adj)| WeekdayRate {
            weekday,
            adjustment: pct(adj),
        })
        .collect();

        let seasonality = [-20, -20, 5, 10, 15, 25, 30, 25, 10, 15, -15, 35]
            .into_iter()
            .zip(1..=12)
            .map(|(adj, month)| MonthRate {
                month,
                adjustment: pct(adj),
            })
            .collect();

        let lead_time_tiers = [
            ("same_day", 0, 30),
            ("last_minute", 3, 15),
            ("short", 7, 5),
            ("standard", 14, 0),
            ("advance", 30, -5),
            ("early", 60, -10),
            ("very_early", 365, -15),
        ]
        .into_iter()
        .map(|(name, max_days, adj)| LeadTimeTier {
            name: name.to_string(),
            max_days,
            adjustment: pct(adj),
        })
        .collect();

        let competitors = [
            ("Marriott Downtown", 199),
            ("Hilton Chicago", 209),
            ("Hyatt Regency", 195),
            ("Palmer House", 185),
        ]
        .into_iter()
        .map(|(name, rate)| CompetitorProfile {
            name: name.to_string(),
            base_rate: Decimal::from(rate),
        })
        .collect();

        Self {
            occupancy_tiers,
            day_of_week,
            seasonality,
            lead_time_tiers,
            min_rate: Decimal::from(99),
            max_rate: Decimal::from(449),
            competitor_premium: pct(15),
            factor_floor: pct(75),
            factor_ceiling: pct(160),
            competitors,
        }
    }
}

impl PricingConfig {
    /// Returns the tier whose band contains `occupancy`.
    ///
    /// Occupancy above the last bound falls into the last tier.
    #[must_use]
    pub fn occupancy_tier(&self, occupancy: Decimal) -> Option<&OccupancyTier> {
        self.occupancy_tiers
            .iter()
            .find(|tier| occupancy <= tier.upper_bound)
            .or_else(|| self.occupancy_tiers.last())
    }

    /// Returns the tier whose band contains `lead_days`.
    #[must_use]
    pub fn lead_time_tier(&self, lead_days: u32) -> Option<&LeadTimeTier> {
        self.lead_time_tiers
            .iter()
            .find(|tier| lead_days <= tier.max_days)
            .or_else(|| self.lead_time_tiers.last())
    }

    /// Weekday adjustment, zero when not listed.
    #[must_use]
    pub fn weekday_adjustment(&self, weekday: Weekday) -> Decimal {
        self.day_of_week
            .iter()
            .find(|entry| entry.weekday == weekday)
            .map_or(Decimal::ZERO, |entry| entry.adjustment)
    }

    /// Month adjustment, zero when not listed.
    #[must_use]
    pub fn month_adjustment(&self, month: u32) -> Decimal {
        self.seasonality
            .iter()
            .find(|entry| entry.month == month)
            .map_or(Decimal::ZERO, |entry| entry.adjustment)
    }
}
