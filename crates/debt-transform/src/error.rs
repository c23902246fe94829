use thiserror::Error;

use debt_model::{Metric, ModelError};

/// A cell that could not be turned into a number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("non-numeric value '{value}' for '{indicator}' in {year}")]
    NonNumeric {
        indicator: String,
        year: String,
        value: String,
    },
}

/// Why a single year was left out of the processed table.
#[derive(Debug, Error, PartialEq)]
pub enum YearError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Record(#[from] ModelError),
}

/// Failures rebuilding the processed table from tidy records.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("tidy table has no '{metric}' value for {year}")]
    MissingCell { year: i32, metric: Metric },
    #[error("tidy table has more than one '{metric}' value for {year}")]
    DuplicateCell { year: i32, metric: Metric },
    #[error(transparent)]
    Record(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
