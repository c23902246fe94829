//! Value extraction from resolved indicator rows.

use tracing::warn;

use debt_common::parse_amount;

use crate::error::ExtractError;
use crate::resolve::RowSet;

/// Reads the numeric value of `rows` at the column labelled `year`.
///
/// Returns 0.0 when the set is empty, the year is not a column, or the cell
/// is empty / an NA marker. Thousands separators are stripped before
/// parsing. Text that still does not parse is an [`ExtractError`].
pub fn try_extract_value(rows: &RowSet<'_>, year: &str) -> Result<f64, ExtractError> {
    let Some(cell) = rows.cell(year) else {
        return Ok(0.0);
    };
    match parse_amount(cell) {
        Ok(value) => Ok(value.unwrap_or(0.0)),
        Err(_) => Err(ExtractError::NonNumeric {
            indicator: rows.indicator().to_string(),
            year: year.to_string(),
            value: cell.to_string(),
        }),
    }
}

/// Like [`try_extract_value`] but never fails: unparseable cells are logged
/// with their year and indicator and read as 0.0.
pub fn extract_value(rows: &RowSet<'_>, year: &str) -> f64 {
    match try_extract_value(rows, year) {
        Ok(value) => value,
        Err(error) => {
            warn!(year, indicator = rows.indicator(), %error, "using 0 for unparseable value");
            0.0
        }
    }
}
