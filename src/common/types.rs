// Common type definitions and constants

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Lowercase hexadecimal digest string.
pub type HashDigest = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha1,
    Sha256,
    Blake3,
}

impl HashAlgorithm {
    /// Length of the hex-encoded digest.
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Blake3 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha1 => write!(f, "sha1"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Blake3 => write!(f, "blake3"),
        }
    }
}

/// One `<digest> <path>` record from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub line_number: usize,
    pub expected_hash: HashDigest,
    pub path: String,
}

/// A resolved manifest and its entries, in file order.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    pub entries: Vec<ManifestEntry>,
}

/// Returned when every entry matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSummary {
    pub manifest: PathBuf,
    pub checked: usize,
}

// Constants
pub const DEFAULT_MANIFEST_NAME: &str = "data_hashes.txt";
pub const READ_BUFFER_SIZE: usize = 64 * 1024; // 64KB
pub const COMMENT_PREFIX: char = '#';
