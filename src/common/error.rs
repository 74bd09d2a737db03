// Error types and error handling

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    FileNotFound { path: PathBuf },
    PermissionDenied { path: PathBuf },
    Io { path: PathBuf, source: io::Error },
    ManifestNotFound { directory: PathBuf, name: String },
    ManifestAmbiguous { candidates: Vec<PathBuf> },
    MalformedManifest { line_number: usize, line: String, reason: String },
    HashMismatch { file: String, expected: String, actual: String },
    ValidationFailed { failed: usize, total: usize },
    SerializationError(String),
    ConfigError(String),
}

/// Discriminant of [`Error`], for matching on failure causes without
/// inspecting payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    PermissionDenied,
    Read,
    ManifestNotFound,
    ManifestAmbiguous,
    MalformedManifest,
    HashMismatch,
    ValidationFailed,
    Serialization,
    Config,
}

impl Error {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound { path: path.to_path_buf() },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path: path.to_path_buf() },
            _ => Error::Io { path: path.to_path_buf(), source: err },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound { .. } => ErrorKind::FileNotFound,
            Error::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Error::Io { .. } => ErrorKind::Read,
            Error::ManifestNotFound { .. } => ErrorKind::ManifestNotFound,
            Error::ManifestAmbiguous { .. } => ErrorKind::ManifestAmbiguous,
            Error::MalformedManifest { .. } => ErrorKind::MalformedManifest,
            Error::HashMismatch { .. } => ErrorKind::HashMismatch,
            Error::ValidationFailed { .. } => ErrorKind::ValidationFailed,
            Error::SerializationError(_) => ErrorKind::Serialization,
            Error::ConfigError(_) => ErrorKind::Config,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileNotFound { path } => write!(f, "File not found: {}", path.display()),
            Error::PermissionDenied { path } => {
                write!(f, "Permission denied: {}", path.display())
            }
            Error::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            Error::ManifestNotFound { directory, name } => write!(
                f,
                "No {} manifest found in {}",
                name,
                directory.display()
            ),
            Error::ManifestAmbiguous { candidates } => {
                write!(f, "Found {} candidate manifests:", candidates.len())?;
                for candidate in candidates {
                    write!(f, " {}", candidate.display())?;
                }
                Ok(())
            }
            Error::MalformedManifest { line_number, line, reason } => write!(
                f,
                "Malformed manifest line {}: {} ({:?})",
                line_number, reason, line
            ),
            Error::HashMismatch { file, expected, actual } => write!(
                f,
                "Hash for {} is {}, which does not match the expected {}",
                file, actual, expected
            ),
            Error::ValidationFailed { failed, total } => {
                write!(f, "{} of {} files failed validation", failed, total)
            }
            Error::SerializationError(e) => write!(f, "Serialization error: {}", e),
            Error::ConfigError(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
