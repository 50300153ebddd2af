//! Flatten a directory of fastp JSON reports into one tab-separated table.

pub mod aggregate;
pub mod discover;
pub mod error;
pub mod report;
pub mod summary;
pub mod table;

pub use aggregate::{collect_rows, run};
pub use error::AggregateError;
pub use table::OUTPUT_FILE_NAME;
