use thiserror::Error;

/// Record validation failures.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("{field} for {year} is not finite: {value}")]
    NonFinite {
        year: i32,
        field: &'static str,
        value: f64,
    },
    #[error("{field} for {year} is negative: {value}")]
    NegativeAmount {
        year: i32,
        field: &'static str,
        value: f64,
    },
    #[error("unknown metric label: {0}")]
    UnknownMetric(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
