//! Raw table loading with an ordered encoding fallback.

use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

use super::table::RawTable;

/// Encodings tried when none are configured, in order.
pub const DEFAULT_ENCODINGS: &[&str] = &["utf-8", "latin1", "cp1252", "iso-8859-1"];

/// Options for loading the raw table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// WHATWG encoding labels, tried in order until one decodes and parses.
    pub encodings: Vec<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            encodings: DEFAULT_ENCODINGS.iter().map(|e| (*e).to_string()).collect(),
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_encodings(mut self, encodings: Vec<String>) -> Self {
        if !encodings.is_empty() {
            self.encodings = encodings;
        }
        self
    }
}

/// Reads the raw wide table at `path`.
///
/// Each configured encoding is tried in turn; the first that decodes
/// without malformed sequences and parses as CSV wins. Fails only when the
/// file is missing, unreadable, empty, or no encoding succeeds.
pub fn read_raw_table(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let table = read_raw_table_from_bytes(&bytes, path, options)?;
    info!(
        path = %path.display(),
        encoding = %table.encoding,
        rows = table.row_count(),
        columns = table.headers.len(),
        "raw table loaded"
    );
    Ok(table)
}

/// Decodes and parses an in-memory file. `path` is only used in errors.
pub fn read_raw_table_from_bytes(
    bytes: &[u8],
    path: &Path,
    options: &IngestOptions,
) -> Result<RawTable> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let mut attempts = Vec::with_capacity(options.encodings.len());
    for label in &options.encodings {
        attempts.push(label.clone());
        let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) else {
            warn!(encoding = %label, "unknown encoding label");
            continue;
        };
        let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes)
        else {
            debug!(encoding = %label, path = %path.display(), "decode failed");
            continue;
        };
        let text: &str = &text;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        match parse_table(text) {
            Ok(Some(mut table)) => {
                table.encoding = encoding.name().to_string();
                return Ok(table);
            }
            Ok(None) => {
                return Err(IngestError::EmptyCsv {
                    path: path.to_path_buf(),
                });
            }
            Err(error) => {
                warn!(encoding = %label, path = %path.display(), %error, "csv parse failed");
            }
        }
    }
    Err(IngestError::NoEncoding {
        path: path.to_path_buf(),
        attempts,
    })
}

fn parse_table(text: &str) -> std::result::Result<Option<RawTable>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Ok(None),
    };
    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(Some(RawTable::new(headers, rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_reads_utf8_table() {
        let file = create_temp_csv(b"Indicator,2013,2014\nTotal External debt stocks,\"1,000\",1200\n");
        let table = read_raw_table(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(table.headers, vec!["Indicator", "2013", "2014"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][1], "1,000");
        assert_eq!(table.encoding, "UTF-8");
    }

    #[test]
    fn test_strips_utf8_bom_from_first_header() {
        let file = create_temp_csv("\u{feff}Indicator,2013\nA,1\n".as_bytes());
        let table = read_raw_table(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(table.indicator_column(), Some("Indicator"));
    }

    #[test]
    fn test_falls_back_to_single_byte_encoding() {
        let file = create_temp_csv(b"Indicator,2013\nCaf\xe9 loans,5\n");
        let table = read_raw_table(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(table.rows[0][0], "Caf\u{e9} loans");
        assert_eq!(table.encoding, "windows-1252");
    }

    #[test]
    fn test_fails_when_no_encoding_decodes() {
        let file = create_temp_csv(b"Indicator,2013\nCaf\xe9 loans,5\n");
        let options = IngestOptions::default().with_encodings(vec!["utf-8".to_string()]);
        let result = read_raw_table(file.path(), &options);

        assert!(matches!(result, Err(IngestError::NoEncoding { .. })));
    }

    #[test]
    fn test_unknown_labels_are_skipped() {
        let file = create_temp_csv(b"Indicator,2013\nA,5\n");
        let options = IngestOptions::default()
            .with_encodings(vec!["klingon".to_string(), "latin1".to_string()]);
        let table = read_raw_table(file.path(), &options).unwrap();

        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let result = read_raw_table(Path::new("/nonexistent/India.csv"), &IngestOptions::default());

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv(b"");
        let result = read_raw_table(file.path(), &IngestOptions::default());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_blank_rows_are_skipped_and_cells_kept_verbatim() {
        let file = create_temp_csv(b"Indicator,2013\n,\n Public sector ,7\n");
        let table = read_raw_table(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], " Public sector ");
    }
}
