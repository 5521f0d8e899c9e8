//! Error types for magfield

use std::collections::TryReserveError;

use thiserror::Error;

/// Main error type for the crate
///
/// Out-of-range container access is not an error; see
/// [`DynamicArray`](crate::collections::DynamicArray) for the no-op rules.
#[derive(Debug, Error)]
pub enum Error {
    #[error("allocation of {requested} slots failed: {source}")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Worker error: {0}")]
    Worker(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
