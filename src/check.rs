// Manifest check run: parse, validate and report each entry in order

use std::fs;
use std::io::Write;

use log::debug;
use serde::Serialize;

use crate::common::config::{CheckConfig, OutputFormat};
use crate::common::error::Result;
use crate::common::types::{Algorithm, ValidationOutcome};
use crate::storage::verification::validate;
use crate::validation::manifest::{parse_manifest, ManifestEntry};

/// Counts of outcomes over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub matched: usize,
    pub mismatched: usize,
    pub missing: usize,
}

impl CheckSummary {
    pub fn record(&mut self, outcome: ValidationOutcome) {
        match outcome {
            ValidationOutcome::Match => self.matched += 1,
            ValidationOutcome::Mismatch => self.mismatched += 1,
            ValidationOutcome::NotFound => self.missing += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.matched + self.mismatched + self.missing
    }
}

#[derive(Serialize)]
struct EntryReport<'a> {
    file: &'a str,
    algorithm: Algorithm,
    outcome: ValidationOutcome,
}

/// Write one outcome line in the configured format
pub fn write_outcome<W: Write>(
    out: &mut W,
    format: OutputFormat,
    entry: &ManifestEntry,
    outcome: ValidationOutcome,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}: {}", entry.file_name(), outcome)?,
        OutputFormat::Json => {
            let report = EntryReport {
                file: entry.file_name(),
                algorithm: entry.algorithm(),
                outcome,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Check every manifest entry against the base directory
///
/// Entries are parsed and validated one at a time in manifest order, and
/// each outcome is written as soon as it is known. The first malformed line
/// or read failure stops the run; outcomes already written stay written.
///
/// # Arguments
/// * `config` - Manifest path, base directory and output format
/// * `out` - Sink for the per-entry report lines
///
/// # Returns
/// * `Ok(CheckSummary)` - Outcome counts once every entry was checked
/// * `Err(Error)` - Manifest parse failure or I/O error
pub fn run<W: Write>(config: &CheckConfig, out: &mut W) -> Result<CheckSummary> {
    let text = fs::read_to_string(&config.manifest_path)?;
    let mut summary = CheckSummary::default();

    for entry in parse_manifest(&text) {
        let entry = entry?;
        let outcome = validate(&entry, &config.base_dir)?;
        debug!(
            "{} ({}): {}",
            entry.file_name(),
            entry.algorithm(),
            outcome
        );

        write_outcome(out, config.format, &entry, outcome)?;
        summary.record(outcome);
    }

    out.flush()?;
    Ok(summary)
}
