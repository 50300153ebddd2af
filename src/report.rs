//! Typed view of a fastp JSON report.
//!
//! Only the fields that end up in the summary table are modelled; everything
//! else in the document is ignored by serde.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Number;

use crate::error::AggregateError;

/// The four before/after groups of a paired-end report, in column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadGroup {
    Read1BeforeFiltering,
    Read2BeforeFiltering,
    Read1AfterFiltering,
    Read2AfterFiltering,
}

impl ReadGroup {
    pub const ALL: [ReadGroup; 4] = [
        ReadGroup::Read1BeforeFiltering,
        ReadGroup::Read2BeforeFiltering,
        ReadGroup::Read1AfterFiltering,
        ReadGroup::Read2AfterFiltering,
    ];

    /// Key of the group in the report document.
    pub fn key(self) -> &'static str {
        match self {
            ReadGroup::Read1BeforeFiltering => "read1_before_filtering",
            ReadGroup::Read2BeforeFiltering => "read2_before_filtering",
            ReadGroup::Read1AfterFiltering => "read1_after_filtering",
            ReadGroup::Read2AfterFiltering => "read2_after_filtering",
        }
    }
}

/// Scalar stats pulled out of every group, in column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stat {
    TotalReads,
    TotalBases,
    Q20Bases,
    Q30Bases,
}

impl Stat {
    pub const ALL: [Stat; 4] = [Stat::TotalReads, Stat::TotalBases, Stat::Q20Bases, Stat::Q30Bases];

    pub fn key(self) -> &'static str {
        match self {
            Stat::TotalReads => "total_reads",
            Stat::TotalBases => "total_bases",
            Stat::Q20Bases => "q20_bases",
            Stat::Q30Bases => "q30_bases",
        }
    }
}

/// Number of (group, stat) columns.
pub const STAT_COLUMN_COUNT: usize = 16;

/// Group-major order of the stat columns in the summary table.
pub const STAT_COLUMNS: [(ReadGroup, Stat); STAT_COLUMN_COUNT] = [
    (ReadGroup::Read1BeforeFiltering, Stat::TotalReads),
    (ReadGroup::Read1BeforeFiltering, Stat::TotalBases),
    (ReadGroup::Read1BeforeFiltering, Stat::Q20Bases),
    (ReadGroup::Read1BeforeFiltering, Stat::Q30Bases),
    (ReadGroup::Read2BeforeFiltering, Stat::TotalReads),
    (ReadGroup::Read2BeforeFiltering, Stat::TotalBases),
    (ReadGroup::Read2BeforeFiltering, Stat::Q20Bases),
    (ReadGroup::Read2BeforeFiltering, Stat::Q30Bases),
    (ReadGroup::Read1AfterFiltering, Stat::TotalReads),
    (ReadGroup::Read1AfterFiltering, Stat::TotalBases),
    (ReadGroup::Read1AfterFiltering, Stat::Q20Bases),
    (ReadGroup::Read1AfterFiltering, Stat::Q30Bases),
    (ReadGroup::Read2AfterFiltering, Stat::TotalReads),
    (ReadGroup::Read2AfterFiltering, Stat::TotalBases),
    (ReadGroup::Read2AfterFiltering, Stat::Q20Bases),
    (ReadGroup::Read2AfterFiltering, Stat::Q30Bases),
];

#[derive(Clone, Debug, Deserialize)]
pub struct Duplication {
    pub rate: Number,
}

/// Read and base counts of one group.
#[derive(Clone, Debug, Deserialize)]
pub struct ReadStats {
    pub total_reads: Number,
    pub total_bases: Number,
    pub q20_bases: Number,
    pub q30_bases: Number,
}

impl ReadStats {
    pub fn get(&self, stat: Stat) -> &Number {
        match stat {
            Stat::TotalReads => &self.total_reads,
            Stat::TotalBases => &self.total_bases,
            Stat::Q20Bases => &self.q20_bases,
            Stat::Q30Bases => &self.q30_bases,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct FastpReport {
    pub duplication: Duplication,
    pub read1_before_filtering: ReadStats,
    pub read2_before_filtering: ReadStats,
    pub read1_after_filtering: ReadStats,
    pub read2_after_filtering: ReadStats,
}

impl FastpReport {
    /// Read and parse one report; the file is closed before this returns.
    pub fn from_path(path: &Path) -> Result<Self, AggregateError> {
        let data = fs::read_to_string(path).map_err(|source| AggregateError::ReadReport {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str_at(&data, path)
    }

    /// Parse report text; `path` is only used to label errors.
    pub fn from_str_at(data: &str, path: &Path) -> Result<Self, AggregateError> {
        serde_json::from_str(data).map_err(|e| AggregateError::from_json(path.to_path_buf(), e))
    }

    pub fn group(&self, group: ReadGroup) -> &ReadStats {
        match group {
            ReadGroup::Read1BeforeFiltering => &self.read1_before_filtering,
            ReadGroup::Read2BeforeFiltering => &self.read2_before_filtering,
            ReadGroup::Read1AfterFiltering => &self.read1_after_filtering,
            ReadGroup::Read2AfterFiltering => &self.read2_after_filtering,
        }
    }

    pub fn stat(&self, group: ReadGroup, stat: Stat) -> &Number {
        self.group(group).get(stat)
    }
}
