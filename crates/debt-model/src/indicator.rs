//! Source indicators tracked from the raw wide table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named indicator row of the raw table.
///
/// Labels must match the source file exactly; matching is case- and
/// whitespace-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Indicator {
    PrincipalRepayments,
    InterestPayments,
    TotalDebt,
    ShortTermDebt,
    PublicSector,
}

impl Indicator {
    /// Every tracked indicator, in extraction order.
    pub const ALL: [Indicator; 5] = [
        Indicator::PrincipalRepayments,
        Indicator::InterestPayments,
        Indicator::TotalDebt,
        Indicator::ShortTermDebt,
        Indicator::PublicSector,
    ];

    /// The exact row label in the source table.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::PrincipalRepayments => "Principal repayments (long-term)",
            Indicator::InterestPayments => "Interest payments (long-term)",
            Indicator::TotalDebt => "Total External debt stocks",
            Indicator::ShortTermDebt => "Short-term external debt",
            Indicator::PublicSector => "Public sector",
        }
    }

    /// Short snake_case key used in logs.
    pub fn key(self) -> &'static str {
        match self {
            Indicator::PrincipalRepayments => "principal_repayments",
            Indicator::InterestPayments => "interest_payments",
            Indicator::TotalDebt => "total_debt",
            Indicator::ShortTermDebt => "short_term_debt",
            Indicator::PublicSector => "public_sector",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
