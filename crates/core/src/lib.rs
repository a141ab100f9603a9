//! Core business logic for Cashcast.
//!
//! This crate contains pure forecasting and pricing logic with ZERO web
//! dependencies. Every operation takes the hotel configuration explicitly
//! and returns a value; nothing here holds state between calls.
//!
//! # Modules
//!
//! - `calendar` - Date ranges, seasonality factors and the events calendar
//! - `forecast` - Daily cash flow projection and cash position
//! - `scenario` - What-if comparisons against the baseline projection
//! - `pricing` - Dynamic room rate recommendations and competitor analysis
//! - `validation` - Forecast vs actual variance
//! - `planning` - Monthly roll-up and planning import records
//! - `export` - Summary, CSV and JSON report rendering

pub mod calendar;
pub mod export;
pub mod forecast;
pub mod planning;
pub mod pricing;
pub mod scenario;
pub mod validation;
