//! Analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Preprocess**: read the raw table, build processed and tidy tables, write them
//! 2. **Analyze**: derived metrics and composition tables, written with summaries
//! 3. **Report**: terminal rendering of the processed and composition tables
//!
//! Each stage takes the output of the previous stage and returns typed results.
//! A stage that runs without its predecessor reloads the processed table from
//! disk.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use debt_analysis::{analyze, split};
use debt_ingest::{IngestOptions, read_processed_table, read_raw_table};
use debt_model::{AnalysisResults, Composition, OutputLayout, ProcessedRow, TransformOptions};
use debt_output::{
    WrittenFile, write_analysis_outputs, write_composition_outputs, write_processed_outputs,
};
use debt_transform::{DroppedYear, build_tables};

/// Which stages a run executes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steps {
    pub preprocessing: bool,
    pub analysis: bool,
    pub report: bool,
}

impl Steps {
    pub fn all() -> Self {
        Self {
            preprocessing: true,
            analysis: true,
            report: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.preprocessing || self.analysis || self.report)
    }
}

/// Everything a run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub layout: OutputLayout,
    pub ingest: IngestOptions,
    pub transform: TransformOptions,
    pub steps: Steps,
}

// ============================================================================
// Stage 1: Preprocess
// ============================================================================

#[derive(Debug)]
pub struct PreprocessResult {
    /// Encoding the raw table was decoded with.
    pub encoding: String,
    pub processed: Vec<ProcessedRow>,
    pub dropped: Vec<DroppedYear>,
    pub outputs: Vec<WrittenFile>,
}

/// Reads the raw table and writes the processed and tidy tables.
pub fn preprocess(
    input: &Path,
    ingest: &IngestOptions,
    transform: &TransformOptions,
    layout: &OutputLayout,
) -> Result<PreprocessResult> {
    let span = info_span!("preprocess", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_raw_table(input, ingest)
        .with_context(|| format!("load raw table {}", input.display()))?;
    let tables = build_tables(&table, transform);
    let outputs = write_processed_outputs(layout, &tables.processed, &tables.tidy)
        .context("write processed tables")?;

    info!(
        encoding = %table.encoding,
        years = tables.processed.len(),
        dropped = tables.dropped.len(),
        duration_ms = start.elapsed().as_millis(),
        "preprocessing complete"
    );
    Ok(PreprocessResult {
        encoding: table.encoding,
        processed: tables.processed,
        dropped: tables.dropped,
        outputs,
    })
}

// ============================================================================
// Stage 2: Analyze
// ============================================================================

#[derive(Debug)]
pub struct AnalysisStage {
    pub results: AnalysisResults,
    pub composition: Composition,
    pub outputs: Vec<WrittenFile>,
}

/// Derives the analysis and composition tables and writes them.
pub fn analyze_and_write(rows: &[ProcessedRow], layout: &OutputLayout) -> Result<AnalysisStage> {
    let span = info_span!("analysis", years = rows.len());
    let _guard = span.enter();
    let start = Instant::now();

    let results = analyze(rows);
    let composition = split(rows);
    let mut outputs = write_analysis_outputs(layout, &results).context("write analysis tables")?;
    outputs.extend(
        write_composition_outputs(layout, &composition).context("write composition tables")?,
    );

    info!(
        files = outputs.len(),
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(AnalysisStage {
        results,
        composition,
        outputs,
    })
}

/// Reloads the processed table written by an earlier preprocessing run.
pub fn load_processed(layout: &OutputLayout) -> Result<Vec<ProcessedRow>> {
    let path = layout.processed_table_path();
    read_processed_table(&path).with_context(|| {
        format!(
            "processed table {} is missing or invalid; run the preprocessing step first",
            path.display()
        )
    })
}

/// Creates every output directory of `layout`.
pub fn ensure_dirs(layout: &OutputLayout) -> Result<()> {
    for dir in layout.directories() {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    Ok(())
}

// ============================================================================
// Orchestration
// ============================================================================

/// Outcome of a complete run.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub steps: Steps,
    /// Set when the raw table was read in this run.
    pub encoding: Option<String>,
    pub processed: Vec<ProcessedRow>,
    pub dropped: Vec<DroppedYear>,
    pub analysis: Option<AnalysisResults>,
    /// Composition tables, computed for the analysis or report step.
    pub composition: Option<Composition>,
    pub outputs: Vec<WrittenFile>,
}

/// Runs the selected stages in order.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let steps = config.steps;
    if steps.is_empty() {
        bail!("no pipeline steps selected");
    }
    let span = info_span!("run", dataset = %config.layout.dataset_name);
    let _guard = span.enter();
    let start = Instant::now();

    ensure_dirs(&config.layout)?;
    let mut outcome = RunOutcome {
        steps,
        ..RunOutcome::default()
    };

    let mut processed = None;
    if steps.preprocessing {
        let stage = preprocess(
            &config.input,
            &config.ingest,
            &config.transform,
            &config.layout,
        )?;
        outcome.encoding = Some(stage.encoding);
        outcome.dropped = stage.dropped;
        outcome.outputs.extend(stage.outputs);
        processed = Some(stage.processed);
    }

    if steps.analysis || steps.report {
        let rows = match processed.take() {
            Some(rows) => rows,
            None => load_processed(&config.layout)?,
        };
        if steps.analysis {
            let stage = analyze_and_write(&rows, &config.layout)?;
            outcome.analysis = Some(stage.results);
            outcome.composition = Some(stage.composition);
            outcome.outputs.extend(stage.outputs);
        } else {
            outcome.composition = Some(split(&rows));
        }
        processed = Some(rows);
    }

    outcome.processed = processed.unwrap_or_default();
    info!(
        outputs = outcome.outputs.len(),
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );
    Ok(outcome)
}
