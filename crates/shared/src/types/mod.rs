//! Common types used across the application.

pub mod account;
pub mod money;

pub use account::{AccountCode, FlowDirection};
pub use money::{Currency, round_cents, round_ratio, truncate_cents};
