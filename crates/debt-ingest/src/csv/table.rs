//! The raw wide table as loaded from disk.

/// Wide indicator table: a leading indicator-name column followed by one
/// column per period label.
///
/// Cells are kept exactly as read (no trimming) so that indicator labels
/// match source rows byte for byte. Every row has `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Name of the encoding the file was decoded with.
    pub encoding: String,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self {
            headers,
            rows,
            encoding: "UTF-8".to_string(),
        }
    }

    /// Name of the indicator column (the first header).
    pub fn indicator_column(&self) -> Option<&str> {
        self.headers.first().map(String::as_str)
    }

    /// Index of the first column whose header equals `label`.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == label)
    }

    /// Indicator label of every row, in file order.
    pub fn indicator_labels(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(|row| row.first().map_or("", String::as_str))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_rows_are_padded_and_truncated_to_header_width() {
        let table = RawTable::new(
            strings(&["Indicator", "2013", "2014"]),
            vec![strings(&["A", "1"]), strings(&["B", "1", "2", "3"])],
        );
        assert_eq!(table.rows[0], strings(&["A", "1", ""]));
        assert_eq!(table.rows[1], strings(&["B", "1", "2"]));
    }

    #[test]
    fn test_column_index_returns_first_duplicate() {
        let table = RawTable::new(strings(&["Indicator", "2013", "2013"]), vec![]);
        assert_eq!(table.column_index("2013"), Some(1));
        assert_eq!(table.column_index("2099"), None);
        assert_eq!(table.indicator_column(), Some("Indicator"));
    }
}
