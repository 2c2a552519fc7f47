use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::table::{validate_table, Replacement};

#[derive(Debug, Error)]
pub enum RepairError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: String,
        source: std::string::FromUtf8Error,
    },
    #[error("replacement table entry {index} has an empty pattern")]
    EmptyPattern { index: usize },
}

/// Per-entry hit counts from one pass, in table order. Entries that did not
/// match are omitted.
#[derive(Debug, Clone, Default)]
pub struct RepairReport {
    pub hits: Vec<(String, usize)>,
    pub total: usize,
}

impl RepairReport {
    pub fn changed(&self) -> bool {
        self.total > 0
    }
}

#[derive(Debug)]
pub struct Repairer {
    table: Vec<Replacement>,
}

impl Repairer {
    pub fn new(table: Vec<Replacement>) -> Result<Self, RepairError> {
        if let Some(index) = table.iter().position(|r| r.pattern.is_empty()) {
            return Err(RepairError::EmptyPattern { index });
        }
        for issue in validate_table(&table) {
            warn!("replacement table: {}", issue);
        }
        Ok(Self { table })
    }

    /// Applies every table entry in order as a literal, non-overlapping
    /// substring replacement. Each entry operates on the previous entry's
    /// output.
    pub fn repair_text(&self, input: &str) -> String {
        let mut current = input.to_string();
        for r in &self.table {
            current = current.replace(&r.pattern, &r.replacement);
        }
        current
    }

    pub fn repair_text_with_report(&self, input: &str) -> (String, RepairReport) {
        let mut current = input.to_string();
        let mut report = RepairReport::default();
        for r in &self.table {
            let count = current.matches(r.pattern.as_str()).count();
            if count > 0 {
                current = current.replace(&r.pattern, &r.replacement);
                report.hits.push((r.pattern.clone(), count));
                report.total += count;
            }
        }
        (current, report)
    }

    /// Reads `path` as UTF-8, repairs it, and writes the result back in
    /// place. The whole output is built in memory before the file is
    /// reopened for writing, so a read or decode failure leaves the file
    /// untouched.
    pub fn repair_file(&self, path: &Path) -> Result<RepairReport, RepairError> {
        let (repaired, report) = self.transform_file(path)?;
        fs::write(path, repaired)?;
        Ok(report)
    }

    /// Same read and transform as [`repair_file`](Self::repair_file), but
    /// never writes.
    pub fn preview_file(&self, path: &Path) -> Result<RepairReport, RepairError> {
        let (_, report) = self.transform_file(path)?;
        Ok(report)
    }

    fn transform_file(&self, path: &Path) -> Result<(String, RepairReport), RepairError> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| RepairError::Decode {
            path: path.display().to_string(),
            source,
        })?;
        Ok(self.repair_text_with_report(&content))
    }
}
