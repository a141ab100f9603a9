//! Hotel configuration: the single property the server forecasts for.
//!
//! Loaded once at start-up (see [`crate::AppConfig`]) and never mutated.
//! Missing fields fall back to the embedded defaults for the E501 Chicago
//! property, so an empty configuration file is a valid configuration.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AccountCode, Currency};

/// Static record describing the hotel and its cash flow assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// Display name (e.g. "501-L7 Chicago Hotel").
    pub hotel_name: String,
    /// Planning entity identifier (e.g. "E501").
    pub entity_id: String,
    /// Planning region identifier (e.g. "R131").
    pub region: String,
    /// Human-readable location used in calendar listings.
    pub location: String,
    /// Planning cost-center identifier (e.g. "CC1121").
    pub cost_center: String,
    /// Property identifier in the property management system.
    pub pms_property_id: String,
    /// Reporting currency.
    pub currency: Currency,
    /// Number of sellable rooms.
    pub room_count: u32,
    /// Average daily rate (ADR).
    pub avg_daily_rate: Decimal,
    /// Average occupancy as a fraction in `[0, 1]`.
    pub avg_occupancy: Decimal,
    /// Cash balance before the first projected day.
    pub opening_balance: Decimal,
    /// Minimum cash reserve; balances below it are flagged.
    pub min_reserve: Decimal,
    /// Share of `room_count x avg_daily_rate` used as the daily expense base.
    pub expense_base_ratio: Decimal,
    /// Revenue distribution across inflow account codes.
    pub revenue_mix: Vec<RevenueLine>,
    /// Expense lines with their payment schedule.
    pub expense_schedule: Vec<ExpenseLine>,
    /// Seasonality and event adjustments.
    pub seasonality: SeasonalityTable,
    /// Dimensions stamped on planning import records.
    pub planning: PlanningDimensions,
}

/// Share of adjusted room revenue booked to one inflow account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueLine {
    /// Inflow account code.
    pub code: AccountCode,
    /// Fraction of room revenue (may exceed 1 in total, F&B is additive).
    pub ratio: Decimal,
}

/// Expense line paid as a fraction of the daily expense base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    /// Outflow account code.
    pub code: AccountCode,
    /// Fraction of the daily expense base.
    pub ratio: Decimal,
    /// Days on which the line is paid.
    pub schedule: PaymentSchedule,
}

/// When an expense line is paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSchedule {
    /// Paid every day.
    Daily,
    /// Paid only on the listed days of the month.
    DaysOfMonth(Vec<u32>),
}

impl PaymentSchedule {
    /// Returns true if the line is paid on the given day of the month.
    #[must_use]
    pub fn is_due(&self, day_of_month: u32) -> bool {
        match self {
            Self::Daily => true,
            Self::DaysOfMonth(days) => days.contains(&day_of_month),
        }
    }
}

/// Month, weekday, and event adjustments applied to base revenue.
///
/// Every value is a signed fraction; a base value is multiplied by
/// `1 + fraction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalityTable {
    /// Month adjustments (months not listed adjust by zero).
    pub months: Vec<MonthAdjustment>,
    /// Weekday adjustments (weekdays not listed adjust by zero).
    pub weekdays: Vec<WeekdayAdjustment>,
    /// Local events affecting demand.
    pub events: Vec<EventEntry>,
}

/// Adjustment for a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthAdjustment {
    /// Month number, 1-12.
    pub month: u32,
    /// Signed fraction.
    pub adjustment: Decimal,
}

/// Adjustment for a day of the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayAdjustment {
    /// Day of the week.
    pub weekday: Weekday,
    /// Signed fraction.
    pub adjustment: Decimal,
}

/// Category of a local event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Conventions and trade shows.
    Convention,
    /// Sporting events.
    Sports,
    /// Music and culture festivals.
    Festival,
    /// Public holidays.
    Holiday,
    /// Retail peaks.
    Shopping,
    /// Anything else (parades, openings).
    Event,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Convention => "convention",
            Self::Sports => "sports",
            Self::Festival => "festival",
            Self::Holiday => "holiday",
            Self::Shopping => "shopping",
            Self::Event => "event",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "convention" => Ok(Self::Convention),
            "sports" => Ok(Self::Sports),
            "festival" => Ok(Self::Festival),
            "holiday" => Ok(Self::Holiday),
            "shopping" => Ok(Self::Shopping),
            "event" => Ok(Self::Event),
            _ => Err(format!("Unknown event type: {s}")),
        }
    }
}

/// A named local event spanning an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEntry {
    /// Event name.
    pub name: String,
    /// Event category.
    pub kind: EventKind,
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
    /// Signed demand impact fraction.
    pub impact: Decimal,
}

impl EventEntry {
    /// Returns true if the event is running on `date`.
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Planning dimensions that are constant across import records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningDimensions {
    /// Planning version (e.g. "Final").
    pub version: String,
    /// Future1 dimension member.
    pub future1: String,
    /// Default planning scenario for exports.
    pub scenario: String,
}

impl Default for PlanningDimensions {
    fn default() -> Self {
        Self {
            version: "Final".to_string(),
            future1: "No Future1".to_string(),
            scenario: "Forecast".to_string(),
        }
    }
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            hotel_name: "501-L7 Chicago Hotel".to_string(),
            entity_id: "E501".to_string(),
            region: "R131".to_string(),
            location: "Chicago, Illinois".to_string(),
            cost_center: "CC1121".to_string(),
            pms_property_id: "CHICAGOL7".to_string(),
            currency: Currency::Usd,
            room_count: 250,
            avg_daily_rate: Decimal::new(18900, 2),
            avg_occupancy: Decimal::new(75, 2),
            opening_balance: Decimal::new(350_000_00, 2),
            min_reserve: Decimal::new(75_000_00, 2),
            expense_base_ratio: Decimal::new(60, 2),
            revenue_mix: default_revenue_mix(),
            expense_schedule: default_expense_schedule(),
            seasonality: SeasonalityTable::default(),
            planning: PlanningDimensions::default(),
        }
    }
}

fn default_revenue_mix() -> Vec<RevenueLine> {
    [
        (AccountCode::RoomsOnly, 70),
        (AccountCode::RetailWeb, 30),
        (AccountCode::BreakfastFood, 15),
        (AccountCode::LunchFood, 10),
        (AccountCode::DinnerFood, 10),
    ]
    .into_iter()
    .map(|(code, pct)| RevenueLine {
        code,
        ratio: Decimal::new(pct, 2),
    })
    .collect()
}

fn default_expense_schedule() -> Vec<ExpenseLine> {
    let first = || PaymentSchedule::DaysOfMonth(vec![1]);
    let semi_monthly = || PaymentSchedule::DaysOfMonth(vec![1, 15]);

    [
        (AccountCode::StateUnemploymentInsurance, 5, first()),
        (AccountCode::LocalPayrollTax, 8, semi_monthly()),
        (AccountCode::OtherPay, 20, semi_monthly()),
        (AccountCode::HolidayPay, 4, PaymentSchedule::Daily),
        (AccountCode::AgencyFees, 8, PaymentSchedule::Daily),
        (AccountCode::BankCharges, 4, PaymentSchedule::Daily),
        (AccountCode::BanquetExpenses, 10, semi_monthly()),
        (AccountCode::CleaningSupplies, 6, PaymentSchedule::Daily),
        (AccountCode::CreditCardCommissions, 10, PaymentSchedule::Daily),
    ]
    .into_iter()
    .map(|(code, pct, schedule)| ExpenseLine {
        code,
        ratio: Decimal::new(pct, 2),
        schedule,
    })
    .collect()
}

impl Default for SeasonalityTable {
    fn default() -> Self {
        let high = Decimal::new(35, 2);
        let low = Decimal::new(-35, 2);
        let months = (1..=12)
            .map(|month| MonthAdjustment {
                month,
                adjustment: match month {
                    6 | 7 | 8 | 12 => high,
                    1 | 2 | 11 => low,
                    _ => Decimal::ZERO,
                },
            })
            .collect();

        let weekdays = [Weekday::Sat, Weekday::Sun]
            .into_iter()
            .map(|weekday| WeekdayAdjustment {
                weekday,
                adjustment: Decimal::new(15, 2),
            })
            .collect();

        Self {
            months,
            weekdays,
            events: default_events(),
        }
    }
}

fn ymd(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap_or_default()
}

fn default_events() -> Vec<EventEntry> {
    use EventKind::{Convention, Event, Festival, Holiday, Shopping, Sports};

    [
        ("Chicago Auto Show Setup", Convention, (1, 20), (1, 20), 15),
        ("Chicago Auto Show", Convention, (1, 21), (1, 23), 40),
        ("Chicago Auto Show", Convention, (1, 24), (1, 25), 45),
        ("Valentine's Day", Holiday, (2, 14), (2, 14), 25),
        ("St. Patrick's Day Parade", Event, (3, 14), (3, 14), 35),
        ("St. Patrick's Day", Holiday, (3, 17), (3, 17), 30),
        ("NCAA Final Four", Sports, (4, 3), (4, 3), 50),
        ("NCAA Final Four", Sports, (4, 4), (4, 4), 55),
        ("NCAA Championship", Sports, (4, 5), (4, 5), 60),
        ("Memorial Day Weekend", Holiday, (5, 24), (5, 24), 20),
        ("Memorial Day", Holiday, (5, 25), (5, 25), 15),
        ("Chicago Blues Festival", Festival, (6, 12), (6, 12), 30),
        ("Chicago Blues Festival", Festival, (6, 13), (6, 14), 35),
        ("Independence Day Weekend", Holiday, (7, 3), (7, 3), 30),
        ("Independence Day", Holiday, (7, 4), (7, 4), 35),
        ("Lollapalooza", Festival, (8, 1), (8, 1), 45),
        ("Lollapalooza", Festival, (8, 2), (8, 3), 50),
        ("Lollapalooza", Festival, (8, 4), (8, 4), 45),
        ("Labor Day Weekend", Holiday, (9, 5), (9, 5), 20),
        ("Labor Day Weekend", Holiday, (9, 6), (9, 6), 25),
        ("Labor Day", Holiday, (9, 7), (9, 7), 15),
        ("Chicago Marathon", Sports, (10, 11), (10, 11), 40),
        ("Halloween", Holiday, (10, 31), (10, 31), 15),
        ("Thanksgiving", Holiday, (11, 26), (11, 26), 10),
        ("Black Friday", Shopping, (11, 27), (11, 27), 20),
        ("Thanksgiving Weekend", Holiday, (11, 28), (11, 28), 15),
        ("Christmas Eve", Holiday, (12, 24), (12, 24), 20),
        ("Christmas Day", Holiday, (12, 25), (12, 25), 15),
        ("New Year's Eve", Holiday, (12, 31), (12, 31), 50),
    ]
    .into_iter()
    .map(|(name, kind, (sm, sd), (em, ed), pct)| EventEntry {
        name: name.to_string(),
        kind,
        start: ymd(sm, sd),
        end: ymd(em, ed),
        impact: Decimal::new(pct, 2),
    })
    .collect()
}
