// hashcheck - verify files against a manifest of expected digests

pub mod common;
pub mod validation;
pub mod storage;
pub mod check;

// Export the core so the driver and tests can call it directly
pub use crate::common::{Algorithm, CheckConfig, Error, OutputFormat, Result, ValidationOutcome};
pub use crate::validation::{digest, parse_algorithm, parse_manifest, ManifestEntry};
pub use crate::storage::validate;
pub use crate::check::{run, CheckSummary};
