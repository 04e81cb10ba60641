//! Error handling utilities shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = TagCloudError> = std::result::Result<T, E>;

/// Domain-specific error describing failures during configuration, ranking, or IO.
#[derive(Debug, Error)]
pub enum TagCloudError {
    /// Cloud configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The requested number of cloud words was negative.
    #[error("requested word count must not be negative (got {0})")]
    NegativeWordCount(i64),
    /// The input holds fewer distinct words than requested and the strict policy is enabled.
    #[error("requested {requested} words but the input only contains {available} distinct words")]
    InsufficientVocabulary {
        /// Number of words asked for.
        requested: usize,
        /// Number of distinct words available in the input.
        available: usize,
    },
    /// Filesystem or stream IO error with optional context path.
    #[error("io error while processing {path:?}: {source}")]
    Io {
        /// Underlying IO error returned by the standard library.
        source: std::io::Error,
        /// Target path associated with the IO failure if available.
        path: Option<PathBuf>,
    },
    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TagCloudError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl TagCloudError {
    /// Helper constructor that attaches an optional path when wrapping IO errors.
    pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { source, path }
    }
}
