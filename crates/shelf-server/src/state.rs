//! Application state shared by the axum handlers.
//!
//! [`AppState`] owns the record store and the schema built over it. The store
//! sits behind `Arc<tokio::sync::RwLock<>>`: lookups take the read lock and
//! appends take the write lock, so id allocation and append happen as one
//! step even when requests run concurrently.

use std::sync::Arc;

use shelf_storage::{InMemoryStore, SeedData};
use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::schema::{ShelfSchema, SharedStore};

#[derive(Clone)]
pub struct AppState {
    /// The executable schema; resolvers reach `store` through it.
    pub schema: ShelfSchema,
    /// The record store, also held directly for inspection.
    pub store: SharedStore,
    /// Whether `GET /graphql` serves the GraphiQL page.
    pub graphiql: bool,
}

impl AppState {
    /// Creates the state described by `config`, loading the seed file if one
    /// is configured.
    pub fn new(config: &ServerConfig) -> Result<Self, ServerError> {
        let store = match &config.seed_path {
            Some(path) => {
                let store = InMemoryStore::from_seed(SeedData::from_path(path)?)?;
                tracing::info!(path = %path.display(), "loaded seed file");
                store
            }
            None => InMemoryStore::seeded(),
        };
        Self::with_store(store, config.graphiql)
    }

    /// Creates state over the built-in seed with GraphiQL enabled (for testing).
    pub fn in_memory() -> Result<Self, ServerError> {
        Self::with_store(InMemoryStore::seeded(), true)
    }

    /// Creates state over an existing store.
    pub fn with_store(store: InMemoryStore, graphiql: bool) -> Result<Self, ServerError> {
        let store: SharedStore = Arc::new(RwLock::new(store));
        let schema = ShelfSchema::build(store.clone())?;
        Ok(AppState {
            schema,
            store,
            graphiql,
        })
    }
}
