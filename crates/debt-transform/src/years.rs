//! Year column detection.

use std::collections::BTreeSet;

use tracing::debug;

use debt_ingest::RawTable;

/// A raw table column whose label is an integer year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearColumn {
    pub year: i32,
    pub label: String,
}

/// Year columns of `table` in source column order.
///
/// A label counts when it is made only of ASCII digits. The indicator column
/// is never a year. Repeated labels collapse to their first occurrence.
pub fn year_columns(table: &RawTable) -> Vec<YearColumn> {
    let mut seen = BTreeSet::new();
    let mut years = Vec::new();
    for label in table.headers.iter().skip(1) {
        if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let Ok(year) = label.parse::<i32>() else {
            debug!(label = %label, "digit label out of year range");
            continue;
        };
        if !seen.insert(label.as_str()) {
            debug!(label = %label, "duplicate year column ignored");
            continue;
        }
        years.push(YearColumn {
            year,
            label: label.clone(),
        });
    }
    years
}
