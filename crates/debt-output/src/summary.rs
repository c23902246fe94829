//! Plain-text and JSON summaries of the non-tabular analysis results.

use serde::Serialize;
use std::fmt::Write;

use debt_model::{AnalysisResults, StationarityResult};

/// JSON document written next to the text summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDocument<'a> {
    pub stationarity: &'a StationarityResult,
    pub decomposition_computed: bool,
    pub years: Vec<i32>,
}

pub fn summary_json(results: &AnalysisResults) -> SummaryDocument<'_> {
    SummaryDocument {
        stationarity: &results.stationarity,
        decomposition_computed: results.decomposition.is_some(),
        years: results.growth_rates.iter().map(|row| row.year).collect(),
    }
}

/// Renders the text summary. Undefined statistics print as `None`.
pub fn render_summary(results: &AnalysisResults) -> String {
    let stationarity = &results.stationarity;
    let mut out = String::from("stationarity:\n");
    let _ = writeln!(
        out,
        "Test Statistic: {}",
        fixed(stationarity.test_statistic)
    );
    let _ = writeln!(out, "p-value: {}", fixed(stationarity.p_value));
    match &stationarity.critical_values {
        Some(cv) => {
            let _ = writeln!(
                out,
                "Critical Values: 1%: {:.6}, 5%: {:.6}, 10%: {:.6}",
                cv.one_pct, cv.five_pct, cv.ten_pct
            );
        }
        None => out.push_str("Critical Values: None\n"),
    }
    let _ = writeln!(out, "Used Lag: {}", or_none(stationarity.used_lag));
    let _ = writeln!(out, "Observations: {}", or_none(stationarity.nobs));
    out.push('\n');
    out
}

fn fixed(value: Option<f64>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("{v:.6}"))
}

fn or_none(value: Option<usize>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use debt_model::CriticalValues;

    fn results(stationarity: StationarityResult) -> AnalysisResults {
        AnalysisResults {
            decomposition: None,
            stationarity,
            growth_rates: Vec::new(),
            debt_gdp_ratio: Vec::new(),
        }
    }

    #[test]
    fn test_undefined_statistics_render_as_none() {
        let text = render_summary(&results(StationarityResult::undefined()));
        insta::assert_snapshot!(text, @r"
        stationarity:
        Test Statistic: None
        p-value: None
        Critical Values: None
        Used Lag: None
        Observations: None
        ");
    }

    #[test]
    fn test_defined_statistics_render_with_six_decimals() {
        let stationarity = StationarityResult {
            test_statistic: Some(-2.5),
            p_value: Some(0.123_456_78),
            critical_values: Some(CriticalValues {
                one_pct: -4.0,
                five_pct: -3.1,
                ten_pct: -2.7,
            }),
            used_lag: Some(1),
            nobs: Some(9),
        };
        let text = render_summary(&results(stationarity));
        insta::assert_snapshot!(text, @r"
        stationarity:
        Test Statistic: -2.500000
        p-value: 0.123457
        Critical Values: 1%: -4.000000, 5%: -3.100000, 10%: -2.700000
        Used Lag: 1
        Observations: 9
        ");
    }

    #[test]
    fn test_json_summary_keeps_null_fields() {
        let results = results(StationarityResult::undefined());
        let value = serde_json::to_value(summary_json(&results)).unwrap();
        assert_eq!(value["stationarity"]["p_value"], serde_json::Value::Null);
        assert_eq!(value["decomposition_computed"], false);
    }
}
