pub mod common;
pub mod storage;
pub mod validation;

// Export the core operations so tests and callers can reach them directly
pub use crate::common::{Error, ErrorKind, Result, ValidatorConfig};
pub use crate::storage::file_hash;
pub use crate::validation::{validate_data, Validator};
