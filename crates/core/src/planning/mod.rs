//! Monthly roll-up of daily projections and planning-system import records.

pub mod rollup;
pub mod types;


pub use rollup::{aggregate_monthly, import_records, monthly_rollup};
pub use types::{MonthlyPeriod, MonthlyRollup, PlanningRecord};
