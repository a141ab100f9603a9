//! Planning account codes used to label cash flow lines.
//!
//! The set is fixed: five inflow codes and nine outflow codes. Codes are
//! labels only and never drive a calculation.

use serde::{Deserialize, Serialize};

/// Direction of a cash flow line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    /// Cash received.
    Inflow,
    /// Cash paid out.
    Outflow,
}

/// Six-digit planning account code.
///
/// Serialized as the bare code string (e.g. `"411110"`). Ordering follows
/// declaration order, which is also the column order used in exports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AccountCode {
    /// 411110 Rooms Only.
    #[serde(rename = "411110")]
    RoomsOnly,
    /// 411120 Retail Web.
    #[serde(rename = "411120")]
    RetailWeb,
    /// 421100 Breakfast Food Revenue.
    #[serde(rename = "421100")]
    BreakfastFood,
    /// 421200 Lunch Food Revenue.
    #[serde(rename = "421200")]
    LunchFood,
    /// 421300 Dinner Food Revenue.
    #[serde(rename = "421300")]
    DinnerFood,
    /// 611240 State Unemployment Insurance.
    #[serde(rename = "611240")]
    StateUnemploymentInsurance,
    /// 611350 Local Other Payroll Tax.
    #[serde(rename = "611350")]
    LocalPayrollTax,
    /// 612110 Other Pay.
    #[serde(rename = "612110")]
    OtherPay,
    /// 612710 Holiday Pay.
    #[serde(rename = "612710")]
    HolidayPay,
    /// 710100 Agency Fees.
    #[serde(rename = "710100")]
    AgencyFees,
    /// 710140 Bank Charges.
    #[serde(rename = "710140")]
    BankCharges,
    /// 710150 Banquet Expenses.
    #[serde(rename = "710150")]
    BanquetExpenses,
    /// 710220 Cleaning Supplies.
    #[serde(rename = "710220")]
    CleaningSupplies,
    /// 710310 Credit Card Commissions.
    #[serde(rename = "710310")]
    CreditCardCommissions,
}

impl AccountCode {
    /// Every account code in declaration order.
    pub const ALL: [Self; 14] = [
        Self::RoomsOnly,
        Self::RetailWeb,
        Self::BreakfastFood,
        Self::LunchFood,
        Self::DinnerFood,
        Self::StateUnemploymentInsurance,
        Self::LocalPayrollTax,
        Self::OtherPay,
        Self::HolidayPay,
        Self::AgencyFees,
        Self::BankCharges,
        Self::BanquetExpenses,
        Self::CleaningSupplies,
        Self::CreditCardCommissions,
    ];

    /// Returns the six-digit code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::RoomsOnly => "411110",
            Self::RetailWeb => "411120",
            Self::BreakfastFood => "421100",
            Self::LunchFood => "421200",
            Self::DinnerFood => "421300",
            Self::StateUnemploymentInsurance => "611240",
            Self::LocalPayrollTax => "611350",
            Self::OtherPay => "612110",
            Self::HolidayPay => "612710",
            Self::AgencyFees => "710100",
            Self::BankCharges => "710140",
            Self::BanquetExpenses => "710150",
            Self::CleaningSupplies => "710220",
            Self::CreditCardCommissions => "710310",
        }
    }

    /// Returns the human-readable category label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RoomsOnly => "Rooms Only",
            Self::RetailWeb => "Retail Web",
            Self::BreakfastFood => "Breakfast Food Revenue",
            Self::LunchFood => "Lunch Food Revenue",
            Self::DinnerFood => "Dinner Food Revenue",
            Self::StateUnemploymentInsurance => "State Unemployment Insurance",
            Self::LocalPayrollTax => "Local Other Payroll Tax",
            Self::OtherPay => "Other Pay",
            Self::HolidayPay => "Holiday Pay",
            Self::AgencyFees => "Agency Fees",
            Self::BankCharges => "Bank Charges",
            Self::BanquetExpenses => "Banquet Expenses",
            Self::CleaningSupplies => "Cleaning Supplies",
            Self::CreditCardCommissions => "Credit Card Commissions",
        }
    }

    /// Returns whether the account records inflows or outflows.
    #[must_use]
    pub const fn direction(self) -> FlowDirection {
        match self {
            Self::RoomsOnly
            | Self::RetailWeb
            | Self::BreakfastFood
            | Self::LunchFood
            | Self::DinnerFood => FlowDirection::Inflow,
            _ => FlowDirection::Outflow,
        }
    }

    /// Iterates over inflow codes in declaration order.
    pub fn inflows() -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(|code| code.direction() == FlowDirection::Inflow)
    }

    /// Iterates over outflow codes in declaration order.
    pub fn outflows() -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(|code| code.direction() == FlowDirection::Outflow)
    }

    /// Looks up a code by its category label (case-insensitive).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|code| code.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl std::fmt::Display for AccountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for AccountCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == s.trim())
            .ok_or_else(|| format!("Unknown account code: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_fixed_enumeration_sizes() {
        assert_eq!(AccountCode::inflows().count(), 5);
        assert_eq!(AccountCode::outflows().count(), 9);
    }

    #[rstest]
    #[case("411110", AccountCode::RoomsOnly, FlowDirection::Inflow)]
    #[case("421300", AccountCode::DinnerFood, FlowDirection::Inflow)]
    #[case("612110", AccountCode::OtherPay, FlowDirection::Outflow)]
    #[case("710310", AccountCode::CreditCardCommissions, FlowDirection::Outflow)]
    fn test_code_lookup(
        #[case] raw: &str,
        #[case] expected: AccountCode,
        #[case] direction: FlowDirection,
    ) {
        let code = AccountCode::from_str(raw).unwrap();
        assert_eq!(code, expected);
        assert_eq!(code.direction(), direction);
        assert_eq!(code.to_string(), raw);
    }

    #[test]
    fn test_bidirectional_label_lookup() {
        for code in AccountCode::ALL {
            assert_eq!(AccountCode::from_label(code.label()), Some(code));
            assert_eq!(AccountCode::from_str(code.code()), Ok(code));
        }
        assert_eq!(
            AccountCode::from_label("bank charges"),
            Some(AccountCode::BankCharges)
        );
        assert_eq!(AccountCode::from_label("Minibar"), None);
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(AccountCode::from_str("999999").is_err());
    }

    #[test]
    fn test_serializes_as_bare_code() {
        let json = serde_json::to_string(&AccountCode::BankCharges).unwrap();
        assert_eq!(json, "\"710140\"");
        let parsed: AccountCode = serde_json::from_str("\"411120\"").unwrap();
        assert_eq!(parsed, AccountCode::RetailWeb);
    }
}
