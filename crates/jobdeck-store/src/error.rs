//! Storage error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the snapshot store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying file could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document or value could not be (de)serialized.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
