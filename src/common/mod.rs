// Common utilities and shared code

pub mod error;
pub mod config;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use config::{AmbiguityPolicy, ParseOptions, SearchMode, ValidatorConfig};
pub use types::*;
