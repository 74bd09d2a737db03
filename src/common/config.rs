// Configuration types

use clap::ValueEnum;
use crate::common::error::{Error, Result};
use crate::common::types::{HashAlgorithm, DEFAULT_MANIFEST_NAME};

/// Where to look for the manifest relative to the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SearchMode {
    /// Only `<dir>/<name>`
    Root,
    /// Only `<dir>/<child>/<name>` for immediate subdirectories
    Subdirs,
    /// `<dir>/<name>` if present, otherwise the subdirectories
    #[default]
    Any,
}

/// What to do when several subdirectories hold a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AmbiguityPolicy {
    #[default]
    Reject,
    /// Take the first candidate in sorted path order
    First,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub allow_blank_lines: bool,
    pub allow_comments: bool,
    pub strict_digests: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_blank_lines: true,
            allow_comments: false,
            strict_digests: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub manifest_name: String,
    pub search: SearchMode,
    pub on_ambiguous: AmbiguityPolicy,
    pub algorithm: HashAlgorithm,
    pub parse: ParseOptions,
    pub parallel: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            search: SearchMode::default(),
            on_ambiguous: AmbiguityPolicy::default(),
            algorithm: HashAlgorithm::default(),
            parse: ParseOptions::default(),
            parallel: false,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(Error::ConfigError(format!(
                "Manifest name must be a plain file name, got {:?}",
                name
            )));
        }
        self.manifest_name = name;
        Ok(self)
    }

    pub fn with_search(mut self, search: SearchMode) -> Self {
        self.search = search;
        self
    }

    pub fn with_ambiguity_policy(mut self, policy: AmbiguityPolicy) -> Self {
        self.on_ambiguous = policy;
        self
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.manifest_name, "data_hashes.txt");
        assert_eq!(config.search, SearchMode::Any);
        assert_eq!(config.on_ambiguous, AmbiguityPolicy::Reject);
        assert_eq!(config.algorithm, HashAlgorithm::Sha1);
        assert!(config.parse.allow_blank_lines);
        assert!(!config.parse.allow_comments);
        assert!(!config.parallel);
    }

    #[test]
    fn test_manifest_name_rejects_paths() {
        assert!(ValidatorConfig::new().with_manifest_name("").is_err());
        assert!(ValidatorConfig::new().with_manifest_name("sub/hashes.txt").is_err());

        let config = ValidatorConfig::new().with_manifest_name("SHA1SUMS").unwrap();
        assert_eq!(config.manifest_name, "SHA1SUMS");
    }
}
