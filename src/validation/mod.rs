// Validation module - digest engine and manifest parsing

pub mod manifest;
pub mod hash;

pub use manifest::{parse_manifest, ManifestEntry, ManifestLines};
pub use hash::{parse_algorithm, compute_digest, digest};
