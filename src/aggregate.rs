use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::discover::list_reports;
use crate::error::AggregateError;
use crate::report::FastpReport;
use crate::summary::SummaryRow;
use crate::table::write_table;

/// Flatten every report in `dir`, stopping at the first bad one.
pub fn collect_rows(dir: &Path) -> Result<Vec<SummaryRow>, AggregateError> {
    let reports = list_reports(dir)?;
    info!("Found {} report(s) in {}", reports.len(), dir.display());

    let mut rows = Vec::with_capacity(reports.len());
    for path in &reports {
        debug!("Reading {}", path.display());
        let report = FastpReport::from_path(path)?;
        rows.push(SummaryRow::from_report(path, &report));
    }
    Ok(rows)
}

/// Summarise `input_dir` into `output`. Nothing is written unless every
/// report was read successfully.
pub fn run(input_dir: &Path, output: &Path) -> Result<(PathBuf, usize), AggregateError> {
    let rows = collect_rows(input_dir)?;
    write_table(output, &rows)?;
    info!("Wrote {} row(s) to {}", rows.len(), output.display());
    Ok((output.to_path_buf(), rows.len()))
}
