//! Storage error types for shelf-storage.
//!
//! Appends and lookups cannot fail; every variant here comes from building a
//! store out of seed data.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or validating seed data.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization of the seed failed.
    #[error("invalid seed data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A seeded record's id is not its 1-based position in the collection.
    #[error("{collection} seed record at position {position} has id {found}, expected {expected}")]
    NonSequentialId {
        collection: &'static str,
        position: usize,
        expected: i64,
        found: i64,
    },
}
