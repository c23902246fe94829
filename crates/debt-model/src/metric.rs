//! Column schema of the processed (wide) table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::records::ProcessedRow;

/// Label of the year column shared by every output table.
pub const YEAR_COLUMN: &str = "Year";

/// A non-year column of [`ProcessedRow`].
///
/// The declaration order is the column order of the processed table and the
/// indicator order of the tidy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "Total External debt stocks")]
    TotalDebt,
    #[serde(rename = "debt_service")]
    DebtService,
    #[serde(rename = "debt_service_ratio")]
    DebtServiceRatio,
    #[serde(rename = "short_term_ratio")]
    ShortTermRatio,
    #[serde(rename = "public_debt_ratio")]
    PublicDebtRatio,
    #[serde(rename = "annual_growth_rate")]
    AnnualGrowthRate,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::TotalDebt,
        Metric::DebtService,
        Metric::DebtServiceRatio,
        Metric::ShortTermRatio,
        Metric::PublicDebtRatio,
        Metric::AnnualGrowthRate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::TotalDebt => "Total External debt stocks",
            Metric::DebtService => "debt_service",
            Metric::DebtServiceRatio => "debt_service_ratio",
            Metric::ShortTermRatio => "short_term_ratio",
            Metric::PublicDebtRatio => "public_debt_ratio",
            Metric::AnnualGrowthRate => "annual_growth_rate",
        }
    }

    /// Reads this metric's cell from a processed row.
    ///
    /// Only the growth rate can be undefined.
    pub fn value_of(self, row: &ProcessedRow) -> Option<f64> {
        match self {
            Metric::TotalDebt => Some(row.total_debt),
            Metric::DebtService => Some(row.debt_service),
            Metric::DebtServiceRatio => Some(row.debt_service_ratio),
            Metric::ShortTermRatio => Some(row.short_term_ratio),
            Metric::PublicDebtRatio => Some(row.public_debt_ratio),
            Metric::AnnualGrowthRate => row.annual_growth_rate,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.label() == s)
            .ok_or_else(|| ModelError::UnknownMetric(s.to_string()))
    }
}
