use std::path::Path;

use serde_json::Number;

use crate::report::{FastpReport, STAT_COLUMNS, STAT_COLUMN_COUNT};

/// Columns per row, index excluded.
pub const COLUMN_COUNT: usize = 2 + STAT_COLUMN_COUNT;

/// One flattened report.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub report_name: String,
    pub duplication: Number,
    /// Values in `STAT_COLUMNS` order.
    pub stats: [Number; STAT_COLUMN_COUNT],
}

impl SummaryRow {
    pub fn from_report(path: &Path, report: &FastpReport) -> Self {
        Self {
            report_name: path.display().to_string(),
            duplication: report.duplication.rate.clone(),
            stats: STAT_COLUMNS.map(|(group, stat)| report.stat(group, stat).clone()),
        }
    }

    /// Cells in header order.
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(COLUMN_COUNT);
        record.push(self.report_name.clone());
        record.push(self.duplication.to_string());
        record.extend(self.stats.iter().map(Number::to_string));
        record
    }
}

/// Column names without the index column.
pub fn header() -> Vec<String> {
    let mut names = Vec::with_capacity(COLUMN_COUNT);
    names.push("report_name".to_string());
    names.push("duplication".to_string());
    names.extend(
        STAT_COLUMNS
            .iter()
            .map(|(group, stat)| format!("{}_{}", group.key(), stat.key())),
    );
    names
}
