//! What-if scenarios over the daily cash flow projection.

pub mod engine;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::ScenarioEngine;
pub use error::ScenarioError;
pub use types::{CumulativeDiff, DailyDiff, Scenario, ScenarioAdjustments, ScenarioComparison};
