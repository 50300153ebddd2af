use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::AggregateError;

pub const REPORT_SUFFIX: &str = ".json";

/// Report files directly inside `dir`, in the order the directory lists them.
///
/// Selection is a case-sensitive suffix match on the file name. Entries that
/// do not resolve to a regular file are skipped.
pub fn list_reports(dir: &Path) -> Result<Vec<PathBuf>, AggregateError> {
    let read_dir_err = |source| AggregateError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut reports = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        if !entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(REPORT_SUFFIX.as_bytes())
        {
            continue;
        }
        let path = dir.join(entry.file_name());
        if !path.is_file() {
            debug!("skipping {}: not a regular file", path.display());
            continue;
        }
        reports.push(path);
    }
    Ok(reports)
}
