// Manifest resolution and parsing

use crate::common::config::{AmbiguityPolicy, ParseOptions, SearchMode};
use crate::common::error::{Error, Result};
use crate::common::types::{HashAlgorithm, Manifest, ManifestEntry, COMMENT_PREFIX};
use crate::validation::hash::validate_digest_format;
use log::{debug, info};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Find the manifest called `name` for `directory`.
///
/// Subdirectory candidates are sorted by path before the ambiguity policy is
/// applied, so the result does not depend on directory listing order.
pub fn locate_manifest(
    directory: &Path,
    name: &str,
    search: SearchMode,
    on_ambiguous: AmbiguityPolicy,
) -> Result<PathBuf> {
    let metadata = fs::metadata(directory).map_err(|e| Error::from_io(directory, e))?;
    if !metadata.is_dir() {
        return Err(Error::ConfigError(format!(
            "{} is not a directory",
            directory.display()
        )));
    }

    let not_found = || Error::ManifestNotFound {
        directory: directory.to_path_buf(),
        name: name.to_string(),
    };

    if search != SearchMode::Subdirs {
        let root = directory.join(name);
        if root.is_file() {
            info!("Using manifest {}", root.display());
            return Ok(root);
        }
        if search == SearchMode::Root {
            return Err(not_found());
        }
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(directory).map_err(|e| Error::from_io(directory, e))? {
        let entry = entry.map_err(|e| Error::from_io(directory, e))?;
        let child = entry.path();
        if !child.is_dir() {
            continue;
        }
        let candidate = child.join(name);
        if candidate.is_file() {
            debug!("Manifest candidate {}", candidate.display());
            candidates.push(candidate);
        }
    }
    candidates.sort();

    match (candidates.len(), on_ambiguous) {
        (0, _) => Err(not_found()),
        (1, _) | (_, AmbiguityPolicy::First) => {
            let manifest = candidates.swap_remove(0);
            info!("Using manifest {}", manifest.display());
            Ok(manifest)
        }
        (_, AmbiguityPolicy::Reject) => Err(Error::ManifestAmbiguous { candidates }),
    }
}

/// Line-oriented parser for `<digest> <path>` manifests
pub struct ManifestParser {
    options: ParseOptions,
    algorithm: HashAlgorithm,
}

impl ManifestParser {
    /// Parser with default options for SHA-1 manifests
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
            algorithm: HashAlgorithm::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Only consulted when `strict_digests` is set
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Parse manifest text into entries, preserving line order
    pub fn parse(&self, text: &str) -> Result<Vec<ManifestEntry>> {
        let mut entries = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            if let Some(entry) = self.parse_line(idx + 1, line)? {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Parse one line. `Ok(None)` means the line was skipped.
    pub fn parse_line(&self, line_number: usize, line: &str) -> Result<Option<ManifestEntry>> {
        let malformed = |reason: String| Error::MalformedManifest {
            line_number,
            line: line.to_string(),
            reason,
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            if self.options.allow_blank_lines {
                return Ok(None);
            }
            return Err(malformed("blank lines are not allowed".to_string()));
        }

        if trimmed.starts_with(COMMENT_PREFIX) {
            if self.options.allow_comments {
                return Ok(None);
            }
            return Err(malformed("comment lines are not allowed".to_string()));
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let (digest, path) = match fields.as_slice() {
            [digest, path] => (*digest, *path),
            _ => {
                return Err(malformed(format!(
                    "expected 2 fields, found {}",
                    fields.len()
                )))
            }
        };

        if self.options.strict_digests {
            validate_digest_format(digest, self.algorithm).map_err(malformed)?;
        }

        check_relative(path).map_err(malformed)?;

        Ok(Some(ManifestEntry {
            line_number,
            expected_hash: digest.to_string(),
            path: path.to_string(),
        }))
    }

    /// Read and parse the manifest at `path`
    pub fn read(&self, path: &Path) -> Result<Manifest> {
        let text = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        let entries = self.parse(&text)?;
        debug!("Parsed {} entries from {}", entries.len(), path.display());

        Ok(Manifest {
            path: path.to_path_buf(),
            entries,
        })
    }
}

impl Default for ManifestParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry paths must stay under the data directory: no root, drive prefix or `..`
fn check_relative(path: &str) -> std::result::Result<(), String> {
    let path = Path::new(path);
    if path.is_absolute() {
        return Err("path must be relative to the data directory".to_string());
    }

    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {
                return Err("path must be relative to the data directory".to_string())
            }
            Component::ParentDir => {
                return Err("path must not contain '..'".to_string())
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    Ok(())
}

/// Parse manifest text with default options
pub fn parse_manifest(text: &str) -> Result<Vec<ManifestEntry>> {
    ManifestParser::new().parse(text)
}
