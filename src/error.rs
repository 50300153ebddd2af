use std::io;
use std::path::PathBuf;

use serde_json::error::Category;
use thiserror::Error;

/// Everything that can stop an aggregation run.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("cannot read report directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read report {}", path.display())]
    ReadReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("report {} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("report {} is missing a required field or has a non-numeric value", path.display())]
    MissingField {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write summary table {}", path.display())]
    WriteTable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl AggregateError {
    /// Sort a serde_json failure into syntax vs. shape problems.
    pub(crate) fn from_json(path: PathBuf, source: serde_json::Error) -> Self {
        match source.classify() {
            Category::Data => AggregateError::MissingField { path, source },
            Category::Syntax | Category::Eof | Category::Io => AggregateError::Parse { path, source },
        }
    }
}
