//! Derived metrics over processed debt rows.
//!
//! - **metrics**: decomposition, stationarity, growth rates and debt/GDP
//! - **composition**: by-type, by-debtor and flow tables
//!
//! Every routine recovers locally from short or degenerate series; nothing
//! here returns an error.

pub mod composition;
pub mod decompose;
pub mod metrics;
mod regression;
pub mod stationarity;

pub use composition::split;
pub use decompose::seasonal_decompose;
pub use metrics::{analyze, debt_gdp_ratio, growth_rates};
pub use stationarity::{adf_test, critical_values, mackinnon_p_value};
