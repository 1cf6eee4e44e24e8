//! Error types for the ciphersniff-core library.
//!
//! Scanning itself never fails: a buffer with no matches is a valid outcome.
//! Errors only arise while reading input files or while building a
//! [`Registry`](crate::Registry) from malformed data.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ciphersniff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all ciphersniff operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to read input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A constant sequence with no values
    #[error("indicator '{indicator}' has an empty constant sequence")]
    EmptySequence {
        /// Name of the offending indicator
        indicator: String,
    },

    /// An algorithm entry without any indicators
    #[error("algorithm '{algorithm}' has no indicators")]
    EmptyAlgorithm {
        /// Name of the offending algorithm
        algorithm: String,
    },

    /// Two algorithm entries share a name
    #[error("algorithm '{algorithm}' is defined more than once")]
    DuplicateAlgorithm {
        /// The duplicated name
        algorithm: String,
    },

    /// Two indicators of the same algorithm share a name
    #[error("indicator '{indicator}' is defined more than once in algorithm '{algorithm}'")]
    DuplicateIndicator {
        /// Algorithm owning the indicators
        algorithm: String,
        /// The duplicated indicator name
        indicator: String,
    },

    /// Failed to parse a JSON registry
    #[error("failed to parse constant registry: {0}")]
    RegistryParse(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new empty sequence error
    pub fn empty_sequence(indicator: impl Into<String>) -> Self {
        Self::EmptySequence {
            indicator: indicator.into(),
        }
    }

    /// Creates a new empty algorithm error
    pub fn empty_algorithm(algorithm: impl Into<String>) -> Self {
        Self::EmptyAlgorithm {
            algorithm: algorithm.into(),
        }
    }

    /// Creates a new duplicate algorithm error
    pub fn duplicate_algorithm(algorithm: impl Into<String>) -> Self {
        Self::DuplicateAlgorithm {
            algorithm: algorithm.into(),
        }
    }

    /// Creates a new duplicate indicator error
    pub fn duplicate_indicator(algorithm: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self::DuplicateIndicator {
            algorithm: algorithm.into(),
            indicator: indicator.into(),
        }
    }

    /// Returns true if the error comes from malformed registry data
    /// rather than from the environment
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            Self::EmptySequence { .. }
                | Self::EmptyAlgorithm { .. }
                | Self::DuplicateAlgorithm { .. }
                | Self::DuplicateIndicator { .. }
                | Self::RegistryParse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::duplicate_indicator("AES", "S-box");
        assert!(err.to_string().contains("AES"));
        assert!(err.to_string().contains("S-box"));

        let err = Error::empty_sequence("Rcon");
        assert!(err.to_string().contains("empty constant sequence"));
    }

    #[test]
    fn test_is_registry_error() {
        assert!(Error::empty_algorithm("FNV").is_registry_error());
        assert!(Error::duplicate_algorithm("FNV").is_registry_error());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!Error::file_read("/nonexistent", io).is_registry_error());
    }
}
