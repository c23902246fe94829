//! Output generation for external debt analysis.
//!
//! - **frames**: DataFrames with the published column labels
//! - **writer**: CSV tables under an [`OutputLayout`](debt_model::OutputLayout)
//! - **summary**: plain-text and JSON summaries of the stationarity test

pub mod error;
pub mod frames;
pub mod summary;
pub mod writer;

pub use error::{OutputError, Result};
pub use frames::{
    by_debtor_frame, by_type_frame, debt_gdp_frame, decomposition_frame, flows_frame,
    growth_frame, processed_frame, tidy_frame,
};
pub use summary::{SummaryDocument, render_summary, summary_json};
pub use writer::{
    WrittenFile, write_analysis_outputs, write_composition_outputs, write_frame,
    write_processed_outputs,
};
