// Common type definitions shared by the validator and the driver

use std::fmt;
use std::str::FromStr;
use serde::Serialize;

use crate::common::error::Error;

/// Digest algorithms a manifest entry may name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Sha1,
    Sha256,
    Md5,
}

impl Algorithm {
    /// Identifier as written in a manifest
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Md5 => "md5",
        }
    }

    /// Raw digest size in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Sha1 => SHA1_DIGEST_SIZE,
            Algorithm::Sha256 => SHA256_DIGEST_SIZE,
            Algorithm::Md5 => MD5_DIGEST_SIZE,
        }
    }

    /// Length of the rendered lowercase hex digest
    pub fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "md5" => Ok(Algorithm::Md5),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Per-entry result of checking a file against its expected digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationOutcome {
    #[serde(rename = "OK")]
    Match,
    #[serde(rename = "FAIL")]
    Mismatch,
    #[serde(rename = "NOT FOUND")]
    NotFound,
}

impl ValidationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationOutcome::Match => "OK",
            ValidationOutcome::Mismatch => "FAIL",
            ValidationOutcome::NotFound => "NOT FOUND",
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Constants
pub const SHA1_DIGEST_SIZE: usize = 20;
pub const SHA256_DIGEST_SIZE: usize = 32;
pub const MD5_DIGEST_SIZE: usize = 16;
pub const MANIFEST_FIELD_SEPARATOR: char = ' ';
pub const MANIFEST_FIELD_COUNT: usize = 3;
