//! Data ingestion for external debt analysis.
//!
//! This crate loads the raw wide indicator table (one row per indicator, one
//! column per year) and reloads processed tables written by earlier runs.
//!
//! # Features
//!
//! - **Encoding fallback**: candidate encodings are tried in a fixed order
//! - **Verbatim cells**: indicator labels are kept exactly as in the file
//! - **Processed reload**: typed [`debt_model::ProcessedRow`]s from a saved table
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use debt_ingest::{IngestOptions, read_raw_table};
//!
//! let table = read_raw_table(Path::new("notebooks/India.csv"), &IngestOptions::default())?;
//! println!("decoded as {}", table.encoding);
//! ```

mod csv;
mod error;
mod processed;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{DEFAULT_ENCODINGS, IngestOptions, RawTable, read_raw_table, read_raw_table_from_bytes};

// === Processed Tables ===
pub use processed::{processed_rows_from_frame, read_processed_table};
