//! Typed rows of every table the pipeline produces.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::metric::Metric;

/// One year of the processed (wide) table.
///
/// Ratios are percentages of `total_debt` and are zero whenever the total is
/// zero. `annual_growth_rate` is `None` for the first year and whenever the
/// previous total was zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRow {
    pub year: i32,
    pub total_debt: f64,
    pub debt_service: f64,
    pub debt_service_ratio: f64,
    pub short_term_ratio: f64,
    pub public_debt_ratio: f64,
    pub annual_growth_rate: Option<f64>,
}

impl ProcessedRow {
    /// Builds a row, rejecting non-finite values and a negative total.
    pub fn new(
        year: i32,
        total_debt: f64,
        debt_service: f64,
        debt_service_ratio: f64,
        short_term_ratio: f64,
        public_debt_ratio: f64,
    ) -> Result<Self> {
        let row = Self {
            year,
            total_debt,
            debt_service,
            debt_service_ratio,
            short_term_ratio,
            public_debt_ratio,
            annual_growth_rate: None,
        };
        row.validate()?;
        Ok(row)
    }

    /// Attaches a growth rate, checking that a defined rate is finite.
    pub fn with_growth_rate(mut self, rate: Option<f64>) -> Result<Self> {
        if let Some(value) = rate {
            ensure_finite(self.year, Metric::AnnualGrowthRate.label(), value)?;
        }
        self.annual_growth_rate = rate;
        Ok(self)
    }

    /// Re-checks the row invariants.
    pub fn validate(&self) -> Result<()> {
        for metric in Metric::ALL {
            if let Some(value) = metric.value_of(self) {
                ensure_finite(self.year, metric.label(), value)?;
            }
        }
        if self.total_debt < 0.0 {
            return Err(ModelError::NegativeAmount {
                year: self.year,
                field: Metric::TotalDebt.label(),
                value: self.total_debt,
            });
        }
        Ok(())
    }
}

fn ensure_finite(year: i32, field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::NonFinite { year, field, value })
    }
}

/// One (Year, Indicator, Value) triple of the tidy table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidyRecord {
    pub year: i32,
    pub indicator: Metric,
    pub value: Option<f64>,
}

/// Debt split by maturity and by public share for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtByTypeRow {
    pub year: i32,
    pub total_debt: f64,
    pub short_term: f64,
    pub short_term_pct: f64,
    pub long_term: f64,
    pub long_term_pct: f64,
    pub public_sector: f64,
    pub public_sector_pct: f64,
}

/// Debt split by debtor for one year. Private is the complement of public.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtByDebtorRow {
    pub year: i32,
    pub public_sector: f64,
    pub public_sector_pct: f64,
    pub private_sector: f64,
    pub private_sector_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtFlowRow {
    pub year: i32,
    pub debt_service: f64,
    pub debt_service_ratio: f64,
}

/// Output of the composition split, one row per processed year in each table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub by_type: Vec<DebtByTypeRow>,
    pub by_debtor: Vec<DebtByDebtorRow>,
    pub flows: Vec<DebtFlowRow>,
}
