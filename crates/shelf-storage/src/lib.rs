//! Record storage for the shelf gateway.
//!
//! Provides the [`RecordStore`] trait describing the operations resolvers
//! need (find-by-id, filter, append) and the [`InMemoryStore`] backend that
//! holds both collections for the lifetime of the process.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`seed`]: initial records, built-in or loaded from a JSON file
//! - [`traits`]: RecordStore trait definition
//! - [`memory`]: InMemoryStore implementation

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::StorageError;
pub use memory::InMemoryStore;
pub use seed::SeedData;
pub use traits::RecordStore;
