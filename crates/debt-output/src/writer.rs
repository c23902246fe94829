//! Writing the output tables to disk.
//!
//! Directories are expected to exist; creating them is the caller's job.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{debug, info};

use debt_model::{AnalysisResults, Composition, OutputLayout, ProcessedRow, TidyRecord};

use crate::error::{OutputError, Result};
use crate::frames::{
    by_debtor_frame, by_type_frame, debt_gdp_frame, decomposition_frame, flows_frame,
    growth_frame, processed_frame, tidy_frame,
};
use crate::summary::{render_summary, summary_json};

/// Writes `df` as CSV with a header row; nulls become empty cells.
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    CsvWriter::new(&mut writer)
        .include_header(true)
        .finish(df)
        .map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = df.height(), "table written");
    Ok(())
}

/// A file produced by one of the writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// Data rows for tables, `None` for summary documents.
    pub rows: Option<usize>,
}

impl WrittenFile {
    fn table(path: PathBuf, rows: usize) -> Self {
        Self {
            path,
            rows: Some(rows),
        }
    }

    fn document(path: PathBuf) -> Self {
        Self { path, rows: None }
    }
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the processed and tidy tables under `layout.processed_dir`.
pub fn write_processed_outputs(
    layout: &OutputLayout,
    processed: &[ProcessedRow],
    tidy: &[TidyRecord],
) -> Result<Vec<WrittenFile>> {
    let processed_path = layout.processed_table_path();
    write_frame(&mut processed_frame(processed)?, &processed_path)?;
    let tidy_path = layout.tidy_table_path();
    write_frame(&mut tidy_frame(tidy)?, &tidy_path)?;
    info!(
        processed = %processed_path.display(),
        tidy = %tidy_path.display(),
        "processed tables written"
    );
    Ok(vec![
        WrittenFile::table(processed_path, processed.len()),
        WrittenFile::table(tidy_path, tidy.len()),
    ])
}

/// Writes the analysis tables and both summary files under `layout.tables_dir`.
pub fn write_analysis_outputs(
    layout: &OutputLayout,
    results: &AnalysisResults,
) -> Result<Vec<WrittenFile>> {
    let mut outputs = Vec::new();
    if let Some(rows) = &results.decomposition {
        let path = layout.table_path("decomposition");
        write_frame(&mut decomposition_frame(rows)?, &path)?;
        outputs.push(WrittenFile::table(path, rows.len()));
    }
    let growth_path = layout.table_path("growth_rates");
    write_frame(&mut growth_frame(&results.growth_rates)?, &growth_path)?;
    outputs.push(WrittenFile::table(growth_path, results.growth_rates.len()));

    let ratio_path = layout.table_path("debt_gdp_ratio");
    write_frame(&mut debt_gdp_frame(&results.debt_gdp_ratio)?, &ratio_path)?;
    outputs.push(WrittenFile::table(
        ratio_path,
        results.debt_gdp_ratio.len(),
    ));

    let text_path = layout.summary_text_path();
    write_text(&text_path, &render_summary(results))?;
    outputs.push(WrittenFile::document(text_path));

    let json_path = layout.summary_json_path();
    let json = serde_json::to_string_pretty(&summary_json(results))?;
    write_text(&json_path, &json)?;
    outputs.push(WrittenFile::document(json_path));

    info!(files = outputs.len(), "analysis outputs written");
    Ok(outputs)
}

/// Writes the by-type, by-debtor and flow tables under `layout.tables_dir`.
pub fn write_composition_outputs(
    layout: &OutputLayout,
    composition: &Composition,
) -> Result<Vec<WrittenFile>> {
    let tables = [
        ("debt_by_type", by_type_frame(composition)?),
        ("debt_by_debtor", by_debtor_frame(composition)?),
        ("debt_flows", flows_frame(composition)?),
    ];
    let mut outputs = Vec::with_capacity(tables.len());
    for (name, mut df) in tables {
        let path = layout.table_path(name);
        write_frame(&mut df, &path)?;
        outputs.push(WrittenFile::table(path, df.height()));
    }
    info!(files = outputs.len(), "composition tables written");
    Ok(outputs)
}
