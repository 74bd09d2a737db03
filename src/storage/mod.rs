// Storage module - reading and hashing data files

pub mod verification;

pub use verification::{compute_file_hash, file_hash, verify_file_hash};
