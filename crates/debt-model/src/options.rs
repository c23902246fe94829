//! Configuration for the reshaping pipeline and its outputs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// What to do with a year whose indicator cell holds unparseable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NonNumericPolicy {
    /// Skip the whole year; the processed table gets a gap.
    #[default]
    DropYear,
    /// Substitute 0.0 for the offending cell and keep the year.
    ZeroFill,
}

/// Which row wins when an indicator label appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    #[default]
    First,
    Last,
}

/// Options controlling how the raw table is reshaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    pub non_numeric: NonNumericPolicy,
    pub duplicates: DuplicatePolicy,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_non_numeric(mut self, policy: NonNumericPolicy) -> Self {
        self.non_numeric = policy;
        self
    }

    #[must_use]
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

/// Where output tables are written.
///
/// Directories are expected to exist; creating them is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLayout {
    /// Processed and tidy tables.
    pub processed_dir: PathBuf,
    /// Analysis tables and summary files.
    pub tables_dir: PathBuf,
    /// File-name prefix for the processed tables (e.g. "india").
    pub dataset_name: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::under(Path::new("."))
    }
}

impl OutputLayout {
    pub const DEFAULT_DATASET: &'static str = "india";

    /// Standard layout below `root`: `data/processed` and `results/tables`.
    pub fn under(root: &Path) -> Self {
        Self {
            processed_dir: root.join("data").join("processed"),
            tables_dir: root.join("results").join("tables"),
            dataset_name: Self::DEFAULT_DATASET.to_string(),
        }
    }

    #[must_use]
    pub fn with_dataset_name(mut self, name: impl Into<String>) -> Self {
        self.dataset_name = name.into();
        self
    }

    pub fn processed_table_path(&self) -> PathBuf {
        self.processed_dir
            .join(format!("{}_debt_processed.csv", self.dataset_name))
    }

    pub fn tidy_table_path(&self) -> PathBuf {
        self.processed_dir
            .join(format!("{}_debt_long.csv", self.dataset_name))
    }

    /// Path of an analysis table, `name` without extension.
    pub fn table_path(&self, name: &str) -> PathBuf {
        self.tables_dir.join(format!("{name}.csv"))
    }

    pub fn summary_text_path(&self) -> PathBuf {
        self.tables_dir.join("summary_statistics.txt")
    }

    pub fn summary_json_path(&self) -> PathBuf {
        self.tables_dir.join("summary_statistics.json")
    }

    /// Every directory the layout writes into.
    pub fn directories(&self) -> [&Path; 2] {
        [self.processed_dir.as_path(), self.tables_dir.as_path()]
    }
}
