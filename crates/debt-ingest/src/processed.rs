//! Reloading the processed table written by an earlier preprocessing run.

use std::path::Path;

use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, SerReader};
use tracing::info;

use debt_common::{any_to_f64, any_to_i64};
use debt_model::{Metric, ProcessedRow, YEAR_COLUMN};

use crate::error::{IngestError, Result};

/// Reads a processed table back into typed rows.
///
/// Every processed column must be present. Empty growth-rate cells become
/// `None`; any other empty or non-numeric cell is an error.
pub fn read_processed_table(path: &Path) -> Result<Vec<ProcessedRow>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let rows = processed_rows_from_frame(&df, path)?;
    info!(path = %path.display(), rows = rows.len(), "processed table reloaded");
    Ok(rows)
}

/// Converts a processed-table DataFrame into typed rows.
pub fn processed_rows_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<ProcessedRow>> {
    let names: Vec<&str> = std::iter::once(YEAR_COLUMN)
        .chain(Metric::ALL.iter().map(|metric| metric.label()))
        .collect();
    for name in &names {
        if df.column(name).is_err() {
            return Err(IngestError::MissingColumn {
                column: (*name).to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let year_value = df.column(YEAR_COLUMN)?.get(idx)?;
        let year = any_to_i64(year_value.clone())
            .and_then(|year| i32::try_from(year).ok())
            .ok_or_else(|| invalid(YEAR_COLUMN, &year_value, path))?;

        let mut required = Vec::with_capacity(5);
        for metric in &Metric::ALL[..5] {
            let value = df.column(metric.label())?.get(idx)?;
            let number =
                any_to_f64(value.clone()).ok_or_else(|| invalid(metric.label(), &value, path))?;
            required.push(number);
        }
        let growth = any_to_f64(df.column(Metric::AnnualGrowthRate.label())?.get(idx)?);

        let row = ProcessedRow::new(
            year,
            required[0],
            required[1],
            required[2],
            required[3],
            required[4],
        )
        .and_then(|row| row.with_growth_rate(growth))
        .map_err(|source| IngestError::Record {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

fn invalid(field: &str, value: &AnyValue<'_>, path: &Path) -> IngestError {
    IngestError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        path: path.to_path_buf(),
    }
}
