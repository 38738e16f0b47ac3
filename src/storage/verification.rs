// File digest verification

use std::fs;
use std::path::Path;

use crate::common::error::Result;
use crate::common::types::ValidationOutcome;
use crate::validation::hash::digest;
use crate::validation::manifest::ManifestEntry;

/// Check one manifest entry against the file it names under `base_dir`
///
/// The file name is joined onto `base_dir` as-is. A path with no regular
/// file behind it is reported as `NotFound` without attempting a read.
/// Otherwise the whole file is read and its lowercase hex digest is compared
/// to the expected value with exact, case-sensitive equality.
///
/// # Arguments
/// * `entry` - The manifest entry to check
/// * `base_dir` - Directory the entry's file name is resolved against
///
/// # Returns
/// * `Ok(ValidationOutcome)` - `Match`, `Mismatch` or `NotFound`
/// * `Err(Error::Io)` - If an existing file can't be read
pub fn validate(entry: &ManifestEntry, base_dir: &Path) -> Result<ValidationOutcome> {
    let file_path = base_dir.join(entry.file_name());

    if !file_path.is_file() {
        return Ok(ValidationOutcome::NotFound);
    }

    let bytes = fs::read(&file_path)?;
    let computed = digest(&bytes, entry.algorithm());

    if computed == entry.expected_digest() {
        Ok(ValidationOutcome::Match)
    } else {
        Ok(ValidationOutcome::Mismatch)
    }
}
