//! Planning data types.

use std::collections::BTreeMap;

use cashcast_shared::{AccountCode, Currency};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calendar::DateRange;

/// Daily projections summed over one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPeriod {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Planning year label (e.g. "FY26").
    pub fiscal_year: String,
    /// Planning period label (e.g. "Feb").
    pub period: String,
    /// Projected days falling in the month.
    pub days_in_period: usize,
    /// Balance before the first projected day of the month.
    pub opening_balance: Decimal,
    /// Sum of inflows.
    pub total_inflows: Decimal,
    /// Sum of outflows.
    pub total_outflows: Decimal,
    /// Inflows minus outflows.
    pub net_change: Decimal,
    /// Balance after the last projected day of the month.
    pub closing_balance: Decimal,
    /// Days below the minimum reserve.
    pub days_below_minimum: usize,
    /// Sum per account code.
    pub accounts: BTreeMap<AccountCode, Decimal>,
}

/// One row of a planning-system import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlanningRecord {
    /// Entity member.
    pub entity: String,
    /// Scenario member.
    pub scenario: String,
    /// Year member.
    pub years: String,
    /// Version member.
    pub version: String,
    /// Currency member.
    pub currency: Currency,
    /// Cost center member.
    pub cost_center: String,
    /// Future1 member.
    pub future1: String,
    /// Region member.
    pub region: String,
    /// Period member.
    pub period: String,
    /// Account code.
    pub account: AccountCode,
    /// Signed amount (outflows negative).
    pub amount: Decimal,
}

/// Monthly summary plus its import records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyRollup {
    /// Hotel display name.
    pub hotel_name: String,
    /// Aggregated range.
    pub range: DateRange,
    /// Planning scenario stamped on the records.
    pub scenario: String,
    /// Months in chronological order.
    pub months: Vec<MonthlyPeriod>,
    /// Import records, grouped by month then account.
    pub records: Vec<PlanningRecord>,
}
