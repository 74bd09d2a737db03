// Full per-entry validation report

use crate::common::error::{Error, Result};
use crate::common::types::{HashAlgorithm, HashDigest, ManifestEntry, ValidationSummary};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    Passed,
    Mismatch { actual: HashDigest },
    Unreadable { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryOutcome {
    pub line_number: usize,
    pub path: String,
    pub expected: HashDigest,
    #[serde(flatten)]
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn new(entry: &ManifestEntry, status: EntryStatus) -> Self {
        Self {
            line_number: entry.line_number,
            path: entry.path.clone(),
            expected: entry.expected_hash.clone(),
            status,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == EntryStatus::Passed
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub manifest: PathBuf,
    pub algorithm: HashAlgorithm,
    pub outcomes: Vec<EntryOutcome>,
}

impl ValidationReport {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Earliest failing entry in manifest order
    pub fn first_failure(&self) -> Option<&EntryOutcome> {
        self.outcomes.iter().find(|o| !o.passed())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `Ok` if every entry passed, otherwise `ValidationFailed`
    pub fn into_result(self) -> Result<ValidationSummary> {
        let failed = self.failed();
        if failed > 0 {
            return Err(Error::ValidationFailed {
                failed,
                total: self.outcomes.len(),
            });
        }

        Ok(ValidationSummary {
            checked: self.outcomes.len(),
            manifest: self.manifest,
        })
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.status {
                EntryStatus::Passed => writeln!(f, "OK          {}", outcome.path)?,
                EntryStatus::Mismatch { actual } => writeln!(
                    f,
                    "MISMATCH    {} (expected {}, actual {})",
                    outcome.path, outcome.expected, actual
                )?,
                EntryStatus::Unreadable { reason } => {
                    writeln!(f, "UNREADABLE  {}: {}", outcome.path, reason)?
                }
            }
        }
        write!(
            f,
            "{} of {} files passed ({})",
            self.outcomes.len() - self.failed(),
            self.outcomes.len(),
            self.manifest.display()
        )
    }
}
