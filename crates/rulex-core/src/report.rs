//! Run report for a completed conversion
//!
//! Records which files were used and how many rules each stage produced.

use crate::error::{Error, Result};
use crate::expander::ExpandStats;
use crate::job::JobFile;
use crate::writer::WriteSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Summary of one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When the run finished
    pub timestamp: DateTime<Utc>,
    /// Paths that were used
    pub job: JobFile,
    /// Expansion counts for the simple/develop file
    pub expand: ExpandStats,
    /// Verbatim rules appended
    pub etc: usize,
    /// Rules in the final table, before exclusions
    pub total: usize,
    /// Write counts
    pub write: WriteSummary,
}

impl RunReport {
    /// Build a report stamped with the current time
    pub fn new(
        job: &JobFile,
        expand: ExpandStats,
        etc: usize,
        total: usize,
        write: WriteSummary,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            job: job.clone(),
            expand,
            etc,
            total,
            write,
        }
    }

    /// Expected line count: simple + composed + etc + the space rule - excluded
    pub fn expected_lines(&self) -> usize {
        (self.expand.simple + self.expand.composed + self.etc + 1) - self.write.excluded
    }

    /// Load a report from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the report to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunReport {
        let expand = ExpandStats {
            simple: 10,
            develop: 2,
            skipped: 1,
            composed: 6,
        };
        let write = WriteSummary {
            written: 17,
            excluded: 2,
        };
        RunReport::new(&JobFile::default(), expand, 2, 19, write)
    }

    #[test]
    fn test_expected_lines() {
        let report = sample();
        assert_eq!(report.expected_lines(), 17);
        assert_eq!(report.expected_lines(), report.write.written);
    }

    #[test]
    fn test_report_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = sample();
        report.save(&path).unwrap();
        let loaded = RunReport::load(&path).unwrap();

        assert_eq!(loaded.timestamp, report.timestamp);
        assert_eq!(loaded.expand, report.expand);
        assert_eq!(loaded.write, report.write);
        assert_eq!(loaded.job, report.job);
    }
}
