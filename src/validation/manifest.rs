// Manifest entry parsing

use crate::common::error::{Error, Result};
use crate::common::types::{Algorithm, MANIFEST_FIELD_COUNT, MANIFEST_FIELD_SEPARATOR};
use crate::validation::hash::parse_algorithm;

/// One manifest record: which file to check and what digest it should have
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    file_name: String,
    algorithm: Algorithm,
    expected_digest: String,
}

impl ManifestEntry {
    pub fn new(
        file_name: impl Into<String>,
        algorithm: Algorithm,
        expected_digest: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            algorithm,
            expected_digest: expected_digest.into(),
        }
    }

    /// Parse a single `<file> <algorithm> <digest>` line
    ///
    /// Fields are split on single spaces, so repeated spaces yield empty
    /// fields and the line is rejected. The digest is kept exactly as written.
    /// `InvalidManifest` errors carry line 0; [`parse_manifest`] fills it in.
    ///
    /// # Returns
    /// * `Ok(ManifestEntry)` - For a well-formed line
    /// * `Err(Error::InvalidManifest)` - Wrong field count or empty file name
    /// * `Err(Error::UnsupportedAlgorithm)` - Unknown algorithm token
    pub fn parse_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(MANIFEST_FIELD_SEPARATOR).collect();

        if fields.len() != MANIFEST_FIELD_COUNT {
            return Err(Error::InvalidManifest {
                line: 0,
                reason: format!(
                    "expected {} space-separated fields, got {}",
                    MANIFEST_FIELD_COUNT,
                    fields.len()
                ),
            });
        }

        if fields[0].is_empty() {
            return Err(Error::InvalidManifest {
                line: 0,
                reason: "file name cannot be empty".to_string(),
            });
        }

        let algorithm = parse_algorithm(fields[1])?;

        Ok(Self::new(fields[0], algorithm, fields[2]))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn expected_digest(&self) -> &str {
        &self.expected_digest
    }
}

/// Lazily parse manifest text, one entry per line
///
/// Line numbers are 1-based and attached to `InvalidManifest` errors. A
/// trailing newline does not produce an extra entry; a blank line in the
/// middle of the manifest is malformed.
pub fn parse_manifest(text: &str) -> ManifestLines<'_> {
    ManifestLines {
        lines: text.lines().enumerate(),
    }
}

/// Iterator returned by [`parse_manifest`]
pub struct ManifestLines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Iterator for ManifestLines<'a> {
    type Item = Result<ManifestEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, line) = self.lines.next()?;
        Some(ManifestEntry::parse_line(line).map_err(|e| match e {
            Error::InvalidManifest { reason, .. } => Error::InvalidManifest {
                line: idx + 1,
                reason,
            },
            other => other,
        }))
    }
}
