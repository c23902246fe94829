//! Shared utilities for the debt analysis crates.
//!
//! This crate provides the cell-level numeric rules used across the
//! workspace (thousands separators, NA markers) and Polars `AnyValue`
//! conversions used when tables are read back from disk.

pub mod numeric;
pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use numeric::{NA_MARKERS, format_numeric, is_missing_marker, parse_amount, parse_f64};
pub use polars::{any_to_f64, any_to_i64};
