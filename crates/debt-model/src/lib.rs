//! Data model for external debt analysis.
//!
//! Typed records replace string-keyed tables: every table the pipeline
//! produces has a fixed schema defined here, together with the indicator
//! catalog, the metric column order, the static GDP reference and the
//! configuration structs shared by the library crates.

pub mod analysis;
pub mod error;
pub mod indicator;
pub mod metric;
pub mod options;
pub mod records;
pub mod reference;

pub use analysis::{
    AnalysisResults, CriticalValues, DebtGdpRow, DecompositionRow, GrowthRateRow,
    StationarityResult,
};
pub use error::{ModelError, Result};
pub use indicator::Indicator;
pub use metric::{Metric, YEAR_COLUMN};
pub use options::{DuplicatePolicy, NonNumericPolicy, OutputLayout, TransformOptions};
pub use records::{
    Composition, DebtByDebtorRow, DebtByTypeRow, DebtFlowRow, ProcessedRow, TidyRecord,
};
pub use reference::{GDP_REFERENCE, gdp_for_year};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_labels_round_trip() {
        for metric in Metric::ALL {
            let parsed: Metric = metric.label().parse().expect("parse label");
            assert_eq!(parsed, metric);
        }
        assert!("Year".parse::<Metric>().is_err());
    }

    #[test]
    fn test_stationarity_serializes_nulls() {
        let json = serde_json::to_string(&StationarityResult::undefined()).expect("serialize");
        assert_eq!(
            json,
            r#"{"test_statistic":null,"p_value":null,"critical_values":null,"used_lag":null,"nobs":null}"#
        );
    }
}
