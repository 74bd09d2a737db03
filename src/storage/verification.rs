// File hash computation and verification

use crate::common::error::{Error, Result};
use crate::common::types::{HashAlgorithm, HashDigest, READ_BUFFER_SIZE};
use crate::validation::hash::Digester;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Compute the hex digest of a file's contents
///
/// # Arguments
/// * `file_path` - Path to the file to hash
/// * `algorithm` - Digest algorithm
///
/// # Returns
/// * `Ok(HashDigest)` - Lowercase hex digest
/// * `Err(Error)` - If the file can't be opened or read
pub fn file_hash(file_path: &Path, algorithm: HashAlgorithm) -> Result<HashDigest> {
    let mut file = File::open(file_path).map_err(|e| Error::from_io(file_path, e))?;
    compute_file_hash(&mut file, algorithm).map_err(|e| Error::from_io(file_path, e))
}

/// Hash everything readable from `file`
pub fn compute_file_hash(file: &mut File, algorithm: HashAlgorithm) -> std::io::Result<HashDigest> {
    let mut digester = Digester::new(algorithm);
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        digester.update(&buffer[..bytes_read]);
    }

    Ok(digester.finalize_hex())
}

/// Verify a file's digest against an expected hex digest
pub fn verify_file_hash(
    file_path: &Path,
    reference: &str,
    expected: &str,
    algorithm: HashAlgorithm,
) -> Result<()> {
    let actual = file_hash(file_path, algorithm)?;

    if actual != expected {
        return Err(Error::HashMismatch {
            file: reference.to_string(),
            expected: expected.to_string(),
            actual,
        });
    }

    Ok(())
}
