//! CSV reading utilities.

mod reader;
mod table;

pub use reader::{DEFAULT_ENCODINGS, IngestOptions, read_raw_table, read_raw_table_from_bytes};
pub use table::RawTable;
