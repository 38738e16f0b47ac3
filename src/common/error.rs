// Error types and error handling

use std::io;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    UnsupportedAlgorithm(String),
    InvalidManifest { line: usize, reason: String },
    Config(String),
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::UnsupportedAlgorithm(name) => {
                write!(f, "Unsupported hash algorithm: '{}' (expected sha1, sha256 or md5)", name)
            }
            Error::InvalidManifest { line, reason } => {
                write!(f, "Invalid manifest line {}: {}", line, reason)
            }
            Error::Config(e) => write!(f, "{}", e),
            Error::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
