//! Reshaping of raw wide debt tables.
//!
//! This crate turns the raw indicator table into analysis-ready tables:
//!
//! - **resolve**: indicator label → matching raw rows
//! - **extract**: numeric cell values with zero-on-missing semantics
//! - **years**: year column detection
//! - **tidy**: processed (wide) rows, tidy (long) records, pivot/unpivot

pub mod error;
pub mod extract;
pub mod resolve;
pub mod tidy;
pub mod years;

pub use error::{ExtractError, Result, TransformError, YearError};
pub use extract::{extract_value, try_extract_value};
pub use resolve::{RowSet, resolve, resolve_with};
pub use tidy::{DroppedYear, TidyTables, build_tables, percent_change, pivot_tidy, unpivot};
pub use years::{YearColumn, year_columns};
