//! Currency codes and decimal rounding policy.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount is a `rust_decimal::Decimal`; rounding is banker's rounding
//! (half to even) to the cent, applied at each account line.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept for currency amounts.
pub const CURRENCY_DP: u32 = 2;

/// Number of decimal places kept for ratios, factors and percentages.
pub const RATIO_DP: u32 = 4;

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Singapore Dollar
    Sgd,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
            Self::Sgd => write!(f, "SGD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "SGD" => Ok(Self::Sgd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// Rounds an amount to the cent using banker's rounding.
///
/// The result always carries exactly two decimal places so that rendered
/// output is stable (`100` becomes `100.00`).
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(CURRENCY_DP);
    rounded
}

/// Truncates an amount toward zero at the cent.
///
/// Used for ceilings: a truncated ceiling never exceeds the exact one.
#[must_use]
pub fn truncate_cents(amount: Decimal) -> Decimal {
    let mut truncated = amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::ToZero);
    truncated.rescale(CURRENCY_DP);
    truncated
}

/// Rounds a ratio or factor to four decimal places using banker's rounding.
#[must_use]
pub fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATIO_DP, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_round_cents_half_even() {
        assert_eq!(round_cents(dec!(2.345)), dec!(2.34));
        assert_eq!(round_cents(dec!(2.355)), dec!(2.36));
        assert_eq!(round_cents(dec!(-2.345)), dec!(-2.34));
    }

    #[test]
    fn test_round_cents_pads_scale() {
        let rounded = round_cents(dec!(100));
        assert_eq!(rounded.to_string(), "100.00");
        assert_eq!(round_cents(dec!(7.1)).to_string(), "7.10");
    }

    #[test]
    fn test_truncate_cents_never_rounds_up() {
        assert_eq!(truncate_cents(dec!(217.3499)), dec!(217.34));
        assert_eq!(truncate_cents(dec!(217.3)).to_string(), "217.30");
    }

    #[test]
    fn test_round_ratio() {
        assert_eq!(round_ratio(dec!(0.12345)), dec!(0.1234));
        assert_eq!(round_ratio(dec!(0.12355)), dec!(0.1236));
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Gbp.to_string(), "GBP");
        assert_eq!(Currency::Sgd.to_string(), "SGD");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("SGD").unwrap(), Currency::Sgd);

        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }
}
