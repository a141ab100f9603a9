//! Shared types, errors, and configuration for Cashcast.
//!
//! This crate provides common types used across all other crates:
//! - Currency and account-code types with decimal rounding helpers
//! - Application-wide error types
//! - Configuration management (server, hotel, and pricing tables)

pub mod config;
pub mod error;
pub mod hotel;
pub mod pricing;
pub mod types;

pub use config::{AppConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use hotel::{
    EventEntry, EventKind, ExpenseLine, HotelConfig, MonthAdjustment, PaymentSchedule,
    PlanningDimensions, RevenueLine, SeasonalityTable, WeekdayAdjustment,
};
pub use pricing::{
    CompetitorProfile, LeadTimeTier, MonthRate, OccupancyTier, PricingConfig, WeekdayRate,
};
pub use types::{AccountCode, Currency, FlowDirection};
