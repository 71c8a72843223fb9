//! Error types for tsp-stitch.

use thiserror::Error;

/// Main error type for solver operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be opened or read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input parsed to zero cities.
    #[error("input contains no cities")]
    EmptyInput,

    /// Profile policy file was not valid JSON.
    #[error("invalid profile policy: {0}")]
    Policy(#[from] serde_json::Error),

    /// Invalid solver configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, Error>;
