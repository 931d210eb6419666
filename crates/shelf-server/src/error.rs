//! Startup error type for the shelf server.
//!
//! Request-level failures never surface here: they are reported inside the
//! GraphQL response envelope. [`ServerError`] covers everything that can stop
//! the process from starting.

use crate::config::ConfigError;
use crate::schema::error::GqlError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The seed data could not be loaded.
    #[error("storage error: {0}")]
    Storage(#[from] shelf_storage::StorageError),

    /// The schema failed to build.
    #[error(transparent)]
    Schema(#[from] GqlError),

    /// Binding or serving the listener failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
