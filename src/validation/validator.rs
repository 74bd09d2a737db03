// Validation loop over manifest entries

use crate::common::config::ValidatorConfig;
use crate::common::error::{Error, Result};
use crate::common::types::{Manifest, ManifestEntry, ValidationSummary};
use crate::storage::verification::verify_file_hash;
use crate::validation::manifest::{locate_manifest, ManifestParser};
use crate::validation::report::{EntryOutcome, EntryStatus, ValidationReport};
use log::{debug, info};
use rayon::prelude::*;
use std::path::Path;

/// Checks a data directory against its manifest
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Locate and parse the manifest for `data_directory`
    pub fn load_manifest(&self, data_directory: &Path) -> Result<Manifest> {
        let path = locate_manifest(
            data_directory,
            &self.config.manifest_name,
            self.config.search,
            self.config.on_ambiguous,
        )?;

        ManifestParser::new()
            .with_options(self.config.parse)
            .with_algorithm(self.config.algorithm)
            .read(&path)
    }

    /// Check every entry in manifest order, stopping at the first failure.
    ///
    /// In parallel mode later entries may already have been hashed when a
    /// failure is found, but the error returned is always the one for the
    /// earliest failing entry.
    pub fn validate(&self, data_directory: &Path) -> Result<ValidationSummary> {
        let manifest = self.load_manifest(data_directory)?;
        info!(
            "Checking {} entries from {} ({})",
            manifest.entries.len(),
            manifest.path.display(),
            self.config.algorithm
        );

        if self.config.parallel {
            let first_failure = manifest
                .entries
                .par_iter()
                .find_map_first(|entry| self.check_entry(data_directory, entry).err());
            if let Some(err) = first_failure {
                return Err(err);
            }
        } else {
            for entry in &manifest.entries {
                self.check_entry(data_directory, entry)?;
            }
        }

        info!("All {} entries passed", manifest.entries.len());
        Ok(ValidationSummary {
            checked: manifest.entries.len(),
            manifest: manifest.path,
        })
    }

    /// Check every entry and collect per-entry outcomes instead of stopping.
    /// Unreadable data files are recorded, not propagated; manifest errors
    /// still are.
    pub fn report(&self, data_directory: &Path) -> Result<ValidationReport> {
        let manifest = self.load_manifest(data_directory)?;

        let outcome = |entry: &ManifestEntry| {
            let status = match self.check_entry(data_directory, entry) {
                Ok(()) => EntryStatus::Passed,
                Err(Error::HashMismatch { actual, .. }) => EntryStatus::Mismatch { actual },
                Err(e) => EntryStatus::Unreadable { reason: e.to_string() },
            };
            EntryOutcome::new(entry, status)
        };

        let outcomes: Vec<EntryOutcome> = if self.config.parallel {
            manifest.entries.par_iter().map(outcome).collect()
        } else {
            manifest.entries.iter().map(outcome).collect()
        };

        Ok(ValidationReport {
            manifest: manifest.path,
            algorithm: self.config.algorithm,
            outcomes,
        })
    }

    fn check_entry(&self, data_directory: &Path, entry: &ManifestEntry) -> Result<()> {
        let path = data_directory.join(&entry.path);
        debug!("Checking {} (line {})", path.display(), entry.line_number);

        let result = verify_file_hash(
            &path,
            &entry.path,
            &entry.expected_hash,
            self.config.algorithm,
        );
        if let Err(e) = &result {
            debug!("{}", e);
        }
        result
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

/// Validate `data_directory` with the default configuration
pub fn validate_data(data_directory: impl AsRef<Path>) -> Result<()> {
    Validator::default().validate(data_directory.as_ref())?;
    Ok(())
}
