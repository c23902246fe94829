use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::debug;

use debt_cli::pipeline::{RunConfig, RunOutcome, Steps, run};
use debt_ingest::{IngestOptions, read_raw_table};
use debt_model::{
    DuplicatePolicy, GDP_REFERENCE, Indicator, NonNumericPolicy, OutputLayout, TransformOptions,
};

use crate::cli::{IndicatorsArgs, RunArgs, StepArg};
use crate::summary::{align_column, apply_table_style, dim_cell, status_cell};

pub fn run_pipeline(args: &RunArgs) -> Result<RunOutcome> {
    let config = RunConfig {
        input: args.input.clone(),
        layout: OutputLayout::under(&args.output_root).with_dataset_name(args.dataset.as_str()),
        ingest: ingest_options(&args.encodings),
        transform: TransformOptions::new()
            .with_non_numeric(if args.zero_fill_non_numeric {
                NonNumericPolicy::ZeroFill
            } else {
                NonNumericPolicy::DropYear
            })
            .with_duplicates(if args.last_duplicate {
                DuplicatePolicy::Last
            } else {
                DuplicatePolicy::First
            }),
        steps: steps_from_args(&args.steps),
    };
    debug!(?config, "run configuration");
    run(&config)
}

pub fn run_indicators(args: &IndicatorsArgs) -> Result<()> {
    let table = match &args.input {
        Some(path) => Some(load_for_listing(path, &args.encodings)?),
        None => None,
    };
    let mut table_view = Table::new();
    let mut header = vec!["Key", "Label"];
    if table.is_some() {
        header.push("Present");
    }
    table_view.set_header(header);
    apply_table_style(&mut table_view);
    for indicator in Indicator::ALL {
        let mut row = vec![Cell::new(indicator.key()), Cell::new(indicator.label())];
        if let Some(raw) = &table {
            let present = raw.indicator_labels().any(|label| label == indicator.label());
            row.push(status_cell(present));
        }
        table_view.add_row(row);
    }
    align_column(&mut table_view, 2, CellAlignment::Center);
    println!("{table_view}");
    Ok(())
}

pub fn run_gdp() {
    let mut table = Table::new();
    table.set_header(vec!["Year", "GDP (USD millions)"]);
    apply_table_style(&mut table);
    for (year, gdp) in GDP_REFERENCE {
        table.add_row(vec![Cell::new(year), Cell::new(format!("{gdp:.1}"))]);
    }
    table.add_row(vec![
        dim_cell("other"),
        dim_cell("0 (ratio reported as 0)"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");
}

fn load_for_listing(path: &Path, encodings: &[String]) -> Result<debt_ingest::RawTable> {
    read_raw_table(path, &ingest_options(encodings))
        .with_context(|| format!("load raw table {}", path.display()))
}

fn ingest_options(encodings: &[String]) -> IngestOptions {
    IngestOptions::default().with_encodings(encodings.to_vec())
}

/// Folds the selected steps; `all` selects everything.
pub fn steps_from_args(args: &[StepArg]) -> Steps {
    let mut steps = Steps::default();
    for step in args {
        match step {
            StepArg::All => steps = Steps::all(),
            StepArg::Preprocessing => steps.preprocessing = true,
            StepArg::Analysis => steps.analysis = true,
            StepArg::Report => steps.report = true,
        }
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selects_every_step() {
        assert_eq!(steps_from_args(&[StepArg::All]), Steps::all());
        assert_eq!(
            steps_from_args(&[StepArg::Analysis, StepArg::All]),
            Steps::all()
        );
    }

    #[test]
    fn test_individual_steps_combine() {
        let steps = steps_from_args(&[StepArg::Preprocessing, StepArg::Report]);
        assert!(steps.preprocessing);
        assert!(!steps.analysis);
        assert!(steps.report);
    }

    #[test]
    fn test_visualization_is_an_alias_of_report() {
        use clap::ValueEnum;
        assert_eq!(
            StepArg::from_str("visualization", false),
            Ok(StepArg::Report)
        );
    }
}
