//! Derived Metrics Engine.

use std::time::Instant;

use debt_model::{AnalysisResults, DebtGdpRow, GrowthRateRow, ProcessedRow, gdp_for_year};
use debt_transform::percent_change;
use tracing::{info, info_span, warn};

use crate::decompose::seasonal_decompose;
use crate::stationarity::adf_test;

/// Computes every analysis artifact over the total-debt series.
pub fn analyze(rows: &[ProcessedRow]) -> AnalysisResults {
    let span = info_span!("analyze", years = rows.len());
    let _guard = span.enter();
    let start = Instant::now();

    let years: Vec<i32> = rows.iter().map(|row| row.year).collect();
    let totals: Vec<f64> = rows.iter().map(|row| row.total_debt).collect();

    let decomposition = seasonal_decompose(&years, &totals);
    let stationarity = adf_test(&totals);
    let growth_rates = growth_rates(rows);
    let debt_gdp_ratio = debt_gdp_ratio(rows);

    info!(
        decomposed = decomposition.is_some(),
        stationarity_defined = stationarity.is_defined(),
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    AnalysisResults {
        decomposition,
        stationarity,
        growth_rates,
        debt_gdp_ratio,
    }
}

/// Year-over-year percent change of total debt.
pub fn growth_rates(rows: &[ProcessedRow]) -> Vec<GrowthRateRow> {
    let totals: Vec<f64> = rows.iter().map(|row| row.total_debt).collect();
    rows.iter()
        .zip(percent_change(&totals))
        .map(|(row, total_debt_growth)| GrowthRateRow {
            year: row.year,
            total_debt_growth,
        })
        .collect()
}

/// Total debt as a percentage of the reference GDP.
///
/// Years outside the reference table get GDP 0 and a ratio of 0.
pub fn debt_gdp_ratio(rows: &[ProcessedRow]) -> Vec<DebtGdpRow> {
    rows.iter()
        .map(|row| {
            let gdp = gdp_for_year(row.year);
            let ratio_pct = if gdp > 0.0 {
                row.total_debt / gdp * 100.0
            } else {
                warn!(year = row.year, "no reference GDP for year, ratio set to 0");
                0.0
            };
            DebtGdpRow {
                year: row.year,
                debt: row.total_debt,
                gdp,
                ratio_pct,
            }
        })
        .collect()
}
