// Digest computation for manifest entries

use md5::{Digest, Md5};
use ring::digest as ring_digest;

use crate::common::error::Result;
use crate::common::types::Algorithm;

/// Map a manifest algorithm token to an [`Algorithm`]
///
/// Matching is exact and case-sensitive: only `sha1`, `sha256` and `md5`
/// are accepted.
///
/// # Returns
/// * `Ok(Algorithm)` - For a recognized identifier
/// * `Err(Error::UnsupportedAlgorithm)` - For anything else, including ""
pub fn parse_algorithm(text: &str) -> Result<Algorithm> {
    text.parse()
}

/// Compute the raw digest of `data`
pub fn compute_digest(data: &[u8], algorithm: Algorithm) -> Vec<u8> {
    match algorithm {
        Algorithm::Sha1 => ring_digest::digest(&ring_digest::SHA1_FOR_LEGACY_USE_ONLY, data)
            .as_ref()
            .to_vec(),
        Algorithm::Sha256 => ring_digest::digest(&ring_digest::SHA256, data).as_ref().to_vec(),
        Algorithm::Md5 => Md5::digest(data).to_vec(),
    }
}

/// Compute the digest of `data` rendered as lowercase hex, no separators
pub fn digest(data: &[u8], algorithm: Algorithm) -> String {
    hex::encode(compute_digest(data, algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Error;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
    const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(parse_algorithm("sha1").unwrap(), Algorithm::Sha1);
        assert_eq!(parse_algorithm("sha256").unwrap(), Algorithm::Sha256);
        assert_eq!(parse_algorithm("md5").unwrap(), Algorithm::Md5);
    }

    #[test]
    fn test_parse_algorithm_rejects_unknown() {
        for text in ["", "sha512", "SHA256", "Md5", "sha-256", " sha1", "sha1 "] {
            match parse_algorithm(text) {
                Err(Error::UnsupportedAlgorithm(name)) => assert_eq!(name, text),
                other => panic!("Expected UnsupportedAlgorithm for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_empty_input_vectors() {
        assert_eq!(digest(b"", Algorithm::Sha256), EMPTY_SHA256);
        assert_eq!(digest(b"", Algorithm::Sha1), EMPTY_SHA1);
        assert_eq!(digest(b"", Algorithm::Md5), EMPTY_MD5);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            digest(b"hello", Algorithm::Sha256),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(
            digest(b"abc", Algorithm::Sha1),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(digest(b"abc", Algorithm::Md5), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_digest_deterministic() {
        let data = b"test data";
        for alg in [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Md5] {
            assert_eq!(digest(data, alg), digest(data, alg));
        }
    }

    #[test]
    fn test_digest_length_and_charset() {
        let data = vec![0xABu8; 4096];
        for alg in [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Md5] {
            let raw = compute_digest(&data, alg);
            assert_eq!(raw.len(), alg.digest_len());

            let hex = digest(&data, alg);
            assert_eq!(hex.len(), alg.hex_len());
            assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }
    }
}
