//! Integration tests for the pipeline module.

use std::fs;
use std::path::{Path, PathBuf};

use debt_cli::pipeline::{RunConfig, Steps, load_processed, run};
use debt_ingest::IngestOptions;
use debt_model::{OutputLayout, TransformOptions};
use tempfile::TempDir;

const RAW: &str = "\
Country Name,2013,2014,2015
Total External debt stocks,\"100\",\"150\",0
Principal repayments (long-term),6,9,1
Interest payments (long-term),4,6,1
Short-term external debt,20,30,0
Public sector,40,60,
";

fn write_input(dir: &Path, contents: &[u8]) -> PathBuf {
    let path = dir.join("India.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn config(dir: &TempDir, steps: Steps) -> RunConfig {
    RunConfig {
        input: write_input(dir.path(), RAW.as_bytes()),
        layout: OutputLayout::under(dir.path()),
        ingest: IngestOptions::default(),
        transform: TransformOptions::default(),
        steps,
    }
}

#[test]
fn test_full_run_writes_every_table() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir, Steps::all());

    let outcome = run(&config).unwrap();

    assert_eq!(outcome.encoding.as_deref(), Some("UTF-8"));
    assert_eq!(outcome.processed.len(), 3);
    assert!(outcome.dropped.is_empty());
    let growth: Vec<Option<f64>> = outcome
        .processed
        .iter()
        .map(|row| row.annual_growth_rate)
        .collect();
    assert_eq!(growth, vec![None, Some(50.0), Some(-100.0)]);

    let layout = &config.layout;
    assert!(layout.processed_table_path().exists());
    assert!(layout.tidy_table_path().exists());
    for name in [
        "growth_rates",
        "debt_gdp_ratio",
        "debt_by_type",
        "debt_by_debtor",
        "debt_flows",
    ] {
        assert!(layout.table_path(name).exists(), "{name} missing");
    }
    assert!(!layout.table_path("decomposition").exists());
    assert!(layout.summary_text_path().exists());
    assert!(layout.summary_json_path().exists());
    // processed, tidy, growth, ratio, two summaries, three composition tables
    assert_eq!(outcome.outputs.len(), 9);

    let analysis = outcome.analysis.expect("analysis ran");
    assert!(analysis.decomposition.is_none());
    let ratio = analysis.debt_gdp_ratio[0].ratio_pct;
    assert!((ratio - 100.0 / 1.8568e6 * 100.0).abs() < 1e-12);
}

#[test]
fn test_analysis_alone_reloads_processed_table() {
    let dir = TempDir::new().unwrap();
    let first = run(&config(
        &dir,
        Steps {
            preprocessing: true,
            ..Steps::default()
        },
    ))
    .unwrap();
    assert!(first.analysis.is_none());

    let second = run(&config(
        &dir,
        Steps {
            analysis: true,
            ..Steps::default()
        },
    ))
    .unwrap();
    assert_eq!(second.encoding, None);
    assert_eq!(second.processed, first.processed);
    assert!(second.analysis.is_some());
}

#[test]
fn test_analysis_without_processed_table_fails_clearly() {
    let dir = TempDir::new().unwrap();
    let err = run(&config(
        &dir,
        Steps {
            analysis: true,
            ..Steps::default()
        },
    ))
    .unwrap_err();
    assert!(format!("{err:#}").contains("run the preprocessing step first"));
}

#[test]
fn test_report_only_computes_composition_without_writing() {
    let dir = TempDir::new().unwrap();
    run(&config(
        &dir,
        Steps {
            preprocessing: true,
            ..Steps::default()
        },
    ))
    .unwrap();

    let outcome = run(&config(
        &dir,
        Steps {
            report: true,
            ..Steps::default()
        },
    ))
    .unwrap();
    assert!(outcome.outputs.is_empty());
    let composition = outcome.composition.expect("composition");
    assert_eq!(composition.by_debtor[0].private_sector, 60.0);
}

#[test]
fn test_latin1_input_falls_back() {
    let dir = TempDir::new().unwrap();
    let mut raw = b"Country Name,2013\nTotal External debt stocks,100\n".to_vec();
    raw.extend_from_slice(b"C\xf4te d'Ivoire note,1\n");
    let mut config = config(&dir, Steps::all());
    config.input = write_input(dir.path(), &raw);

    let outcome = run(&config).unwrap();
    assert_ne!(outcome.encoding.as_deref(), Some("UTF-8"));
    assert_eq!(outcome.processed.len(), 1);
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut config = config(&dir, Steps::all());
    config.input = dir.path().join("absent.csv");
    assert!(run(&config).is_err());
}

#[test]
fn test_empty_step_selection_is_rejected() {
    let dir = TempDir::new().unwrap();
    assert!(run(&config(&dir, Steps::default())).is_err());
}

#[test]
fn test_reload_matches_written_rows() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir, Steps::all());
    let outcome = run(&config).unwrap();
    assert_eq!(load_processed(&config.layout).unwrap(), outcome.processed);
}
