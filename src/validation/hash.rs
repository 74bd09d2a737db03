// Digest computation and digest string checks

use crate::common::types::{HashAlgorithm, HashDigest};
use ring::digest;

/// Incremental hasher over the supported algorithms
pub enum Digester {
    Ring(digest::Context),
    Blake3(Box<blake3::Hasher>),
}

impl Digester {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha1 => {
                Digester::Ring(digest::Context::new(&digest::SHA1_FOR_LEGACY_USE_ONLY))
            }
            HashAlgorithm::Sha256 => Digester::Ring(digest::Context::new(&digest::SHA256)),
            HashAlgorithm::Blake3 => Digester::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            Digester::Ring(ctx) => ctx.update(data),
            Digester::Blake3(hasher) => {
                hasher.update(data);
            }
        }
    }

    /// Consume the hasher, returning the lowercase hex digest
    pub fn finalize_hex(self) -> HashDigest {
        match self {
            Digester::Ring(ctx) => hex::encode(ctx.finish().as_ref()),
            Digester::Blake3(hasher) => hex::encode(hasher.finalize().as_bytes()),
        }
    }
}

/// Compute the hex digest of in-memory data
pub fn compute_hash(data: &[u8], algorithm: HashAlgorithm) -> HashDigest {
    let mut digester = Digester::new(algorithm);
    digester.update(data);
    digester.finalize_hex()
}

/// Check that `digest` is lowercase hex of the length `algorithm` produces.
/// Returns a human-readable reason on failure.
pub fn validate_digest_format(digest: &str, algorithm: HashAlgorithm) -> Result<(), String> {
    if digest.len() != algorithm.hex_len() {
        return Err(format!(
            "digest has {} characters (expected {} for {})",
            digest.len(),
            algorithm.hex_len(),
            algorithm
        ));
    }

    if !digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
        return Err("digest is not lowercase hexadecimal".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sha1() {
        assert_eq!(
            compute_hash(&[1, 2, 3], HashAlgorithm::Sha1),
            "7037807198c22a7d2b0807371d763779a84fdfcf"
        );
        assert_eq!(
            compute_hash(b"", HashAlgorithm::Sha1),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn test_known_sha256() {
        assert_eq!(
            compute_hash(b"hello", HashAlgorithm::Sha256),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_blake3_matches_crate() {
        let expected = blake3::hash(b"test data");
        assert_eq!(
            compute_hash(b"test data", HashAlgorithm::Blake3),
            expected.to_hex().to_string()
        );
    }

    #[test]
    fn test_incremental_equals_one_shot() {
        let mut digester = Digester::new(HashAlgorithm::Sha1);
        digester.update(b"hel");
        digester.update(b"lo");
        assert_eq!(
            digester.finalize_hex(),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn test_compute_hash_deterministic() {
        for algorithm in [HashAlgorithm::Sha1, HashAlgorithm::Sha256, HashAlgorithm::Blake3] {
            let hash1 = compute_hash(b"test", algorithm);
            let hash2 = compute_hash(b"test", algorithm);
            assert_eq!(hash1, hash2);
            assert_eq!(hash1.len(), algorithm.hex_len());
        }
    }

    #[test]
    fn test_validate_digest_format() {
        let good = "7037807198c22a7d2b0807371d763779a84fdfcf";
        assert!(validate_digest_format(good, HashAlgorithm::Sha1).is_ok());

        // Wrong length for the algorithm
        assert!(validate_digest_format(good, HashAlgorithm::Sha256).is_err());
        assert!(validate_digest_format("abc", HashAlgorithm::Sha1).is_err());

        // Uppercase is not canonical
        let upper = good.to_uppercase();
        assert!(validate_digest_format(&upper, HashAlgorithm::Sha1).is_err());

        let not_hex = "z".repeat(40);
        assert!(validate_digest_format(&not_hex, HashAlgorithm::Sha1).is_err());
    }
}
