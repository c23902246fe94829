//! Result types of the time-series analysis.

use serde::{Deserialize, Serialize};

/// One year of the additive trend/seasonal/residual decomposition.
///
/// Trend and residual are undefined at the series edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionRow {
    pub year: i32,
    pub original: f64,
    pub trend: Option<f64>,
    pub seasonal: f64,
    pub residual: Option<f64>,
}

/// Critical values of the unit-root test statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    #[serde(rename = "1%")]
    pub one_pct: f64,
    #[serde(rename = "5%")]
    pub five_pct: f64,
    #[serde(rename = "10%")]
    pub ten_pct: f64,
}

/// Augmented Dickey-Fuller test outcome.
///
/// Every field is `None` when the series was too short or degenerate for the
/// regression to be fitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationarityResult {
    pub test_statistic: Option<f64>,
    pub p_value: Option<f64>,
    pub critical_values: Option<CriticalValues>,
    pub used_lag: Option<usize>,
    pub nobs: Option<usize>,
}

impl StationarityResult {
    /// The all-null result reported for unusable series.
    pub fn undefined() -> Self {
        Self::default()
    }

    pub fn is_defined(&self) -> bool {
        self.test_statistic.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRateRow {
    pub year: i32,
    pub total_debt_growth: Option<f64>,
}

/// Debt against the reference GDP for one year (both in USD millions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtGdpRow {
    pub year: i32,
    pub debt: f64,
    pub gdp: f64,
    pub ratio_pct: f64,
}

/// Everything the metrics engine derives from the processed table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Present only when the total-debt series has more than six points.
    pub decomposition: Option<Vec<DecompositionRow>>,
    pub stationarity: StationarityResult,
    pub growth_rates: Vec<GrowthRateRow>,
    pub debt_gdp_ratio: Vec<DebtGdpRow>,
}
