//! CLI library components for the external debt analyzer.

pub mod logging;
pub mod pipeline;
