//! Indicator resolution: mapping indicator labels to raw table rows.

use tracing::{debug, warn};

use debt_ingest::RawTable;
use debt_model::DuplicatePolicy;

/// The rows of a raw table whose indicator cell equals one label.
///
/// An empty set is valid: every extraction from it yields zero.
#[derive(Debug, Clone)]
pub struct RowSet<'a> {
    indicator: String,
    headers: &'a [String],
    rows: Vec<&'a [String]>,
    policy: DuplicatePolicy,
}

impl<'a> RowSet<'a> {
    /// A set with no rows, bound to the given headers.
    pub fn empty(indicator: impl Into<String>, headers: &'a [String]) -> Self {
        Self {
            indicator: indicator.into(),
            headers,
            rows: Vec::new(),
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row extraction reads from, chosen by the duplicate policy.
    pub fn selected_row(&self) -> Option<&'a [String]> {
        match self.policy {
            DuplicatePolicy::First => self.rows.first().copied(),
            DuplicatePolicy::Last => self.rows.last().copied(),
        }
    }

    /// Cell of the selected row under the first column labelled `year`.
    ///
    /// `None` when the set is empty or the label is not a column.
    pub fn cell(&self, year: &str) -> Option<&'a str> {
        let column = self.headers.iter().position(|header| header == year)?;
        self.selected_row()
            .and_then(|row| row.get(column))
            .map(String::as_str)
    }
}

/// Resolves `indicator` with the default (first match) duplicate policy.
pub fn resolve<'a>(table: &'a RawTable, indicator: &str) -> RowSet<'a> {
    resolve_with(table, indicator, DuplicatePolicy::default())
}

/// Collects every row whose first cell equals `indicator` exactly.
pub fn resolve_with<'a>(
    table: &'a RawTable,
    indicator: &str,
    policy: DuplicatePolicy,
) -> RowSet<'a> {
    let rows: Vec<&[String]> = table
        .rows
        .iter()
        .filter(|row| row.first().is_some_and(|label| label == indicator))
        .map(Vec::as_slice)
        .collect();
    match rows.len() {
        0 => warn!(indicator, "indicator not found; values default to 0"),
        1 => debug!(indicator, "indicator resolved"),
        count => warn!(
            indicator,
            count,
            policy = ?policy,
            "indicator appears more than once; using one row"
        ),
    }
    RowSet {
        indicator: indicator.to_string(),
        headers: &table.headers,
        rows,
        policy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RawTable {
        let s = |values: &[&str]| values.iter().map(|v| (*v).to_string()).collect::<Vec<_>>();
        RawTable::new(
            s(&["Indicator", "2013", "2014"]),
            vec![
                s(&["Public sector", "1", "2"]),
                s(&["public sector", "9", "9"]),
                s(&["Public sector", "3", "4"]),
            ],
        )
    }

    #[test]
    fn test_matches_exact_label_only() {
        let table = table();
        let rows = resolve(&table, "Public sector");
        assert_eq!(rows.len(), 2);
        assert!(resolve(&table, "Public sector ").is_empty());
    }

    #[test]
    fn test_duplicate_policy_selects_row() {
        let table = table();
        assert_eq!(resolve(&table, "Public sector").cell("2013"), Some("1"));
        let last = resolve_with(&table, "Public sector", DuplicatePolicy::Last);
        assert_eq!(last.cell("2013"), Some("3"));
    }

    #[test]
    fn test_unknown_year_has_no_cell() {
        let table = table();
        assert_eq!(resolve(&table, "Public sector").cell("1999"), None);
        assert_eq!(resolve(&table, "Absent").cell("2013"), None);
    }
}
