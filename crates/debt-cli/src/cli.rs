//! CLI argument definitions for the debt analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "debt-analyzer",
    version,
    about = "External debt analysis - reshape indicator tables and derive debt metrics",
    long_about = "Reshape a wide external-debt indicator table into processed and tidy tables,\n\
                  then derive growth rates, debt/GDP ratios, decomposition, stationarity\n\
                  statistics and debt composition tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pipeline on a raw indicator CSV.
    Run(RunArgs),

    /// List the tracked indicators, optionally checking an input file.
    Indicators(IndicatorsArgs),

    /// Print the GDP reference table.
    Gdp,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Raw CSV with one row per indicator and one column per year.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Root for `data/processed` and `results/tables` (default: current directory).
    #[arg(long = "output-root", value_name = "DIR", default_value = ".")]
    pub output_root: PathBuf,

    /// Steps to run.
    #[arg(long = "steps", value_enum, num_args = 1.., default_value = "all")]
    pub steps: Vec<StepArg>,

    /// Encodings to try in order (default: utf-8, latin1, cp1252, iso-8859-1).
    #[arg(long = "encoding", value_name = "LABEL", num_args = 1..)]
    pub encodings: Vec<String>,

    /// Prefix of the processed table file names.
    #[arg(long = "dataset", value_name = "NAME", default_value = "india")]
    pub dataset: String,

    /// Read non-numeric cells as zero instead of dropping the year.
    #[arg(long = "zero-fill-non-numeric")]
    pub zero_fill_non_numeric: bool,

    /// Use the last row when an indicator label is duplicated.
    #[arg(long = "last-duplicate")]
    pub last_duplicate: bool,
}

#[derive(Parser)]
pub struct IndicatorsArgs {
    /// Raw CSV to check for each indicator.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Encodings to try in order.
    #[arg(long = "encoding", value_name = "LABEL", num_args = 1..)]
    pub encodings: Vec<String>,
}

/// Pipeline step choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StepArg {
    All,
    Preprocessing,
    Analysis,
    #[value(alias = "visualization")]
    Report,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
