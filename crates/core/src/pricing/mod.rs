//! Dynamic room-rate pricing.
//!
//! Five demand factors (occupancy, weekday, season, lead time, event) are
//! clamped individually and combined multiplicatively with the base rate; a
//! competitor cap may then cut the result. Market and PMS data come from an
//! injected [`MarketSource`].

pub mod competitor;
pub mod engine;
pub mod error;
pub mod factors;
pub mod market;
pub mod pms;
pub mod types;

#[cfg(test)]
mod tests;

pub use competitor::{
    CompetitorAnalysis, EventImpact, MarketPosition, MarketStats, OurPricing, Positioning,
    analyze_competitors,
};
pub use engine::PricingEngine;
pub use error::PricingError;
pub use factors::PriceFactors;
pub use market::{
    CompetitorRate, MarketDay, MarketEvent, MarketSnapshot, MarketSource, SourceError,
    StaticMarketSource,
};
pub use pms::{
    DEFAULT_RATE_CODE, InventoryDay, InventoryOutlook, InventoryRecommendation, InventorySummary,
    OccupancyTier, PmsRate, RateAction, RateComparison, RateComparisonDay, RateComparisonSummary,
    compare_pms_rates, inventory_outlook,
};
pub use types::{
    MarketDataStatus, PriceRecommendation, PricingParameters, PricingReport, PricingRequest,
    PricingSummary,
};
