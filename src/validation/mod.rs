// Validation module

pub mod hash;
pub mod manifest;
pub mod report;
pub mod validator;

pub use hash::{compute_hash, validate_digest_format, Digester};
pub use manifest::{locate_manifest, parse_manifest, ManifestParser};
pub use report::{EntryOutcome, EntryStatus, ValidationReport};
pub use validator::{validate_data, Validator};
