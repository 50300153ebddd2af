use std::path::Path;

use csv::WriterBuilder;

use crate::error::AggregateError;
use crate::summary::{header, SummaryRow};

/// Fixed name of the summary table. Tab-separated despite the extension.
pub const OUTPUT_FILE_NAME: &str = "fastp_reports.csv";

pub const DELIMITER: u8 = b'\t';

/// Write `rows` to `path`, replacing any existing file.
///
/// The first column is the 0-based row index with an empty header cell.
pub fn write_table(path: &Path, rows: &[SummaryRow]) -> Result<(), AggregateError> {
    let write_err = |source| AggregateError::WriteTable {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_path(path)
        .map_err(write_err)?;

    let mut head = vec![String::new()];
    head.extend(header());
    wtr.write_record(&head).map_err(write_err)?;

    for (index, row) in rows.iter().enumerate() {
        let mut record = vec![index.to_string()];
        record.extend(row.to_record());
        wtr.write_record(&record).map_err(write_err)?;
    }

    wtr.flush().map_err(|e| write_err(e.into()))?;
    Ok(())
}
