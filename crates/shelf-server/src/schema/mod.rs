//! The executable GraphQL schema.
//!
//! [`ShelfSchema::build`] registers the [`types`] (`Book`, `Author`), the
//! [`query`] root and the [`mutation`] root, and injects the shared record
//! store as schema data. Resolvers reach the store only through that
//! injected handle, so every schema instance works on its own store.

pub mod error;
pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::dynamic::{ResolverContext, Schema};
use async_graphql::{BatchRequest, BatchResponse, Executor, Request, Response, Variables};
use shelf_storage::InMemoryStore;
use tokio::sync::RwLock;

use self::error::GqlError;

/// Record store shared between all requests executed by one schema.
pub type SharedStore = Arc<RwLock<InMemoryStore>>;

/// Query, mutation and entity types bound into one executable unit.
#[derive(Clone)]
pub struct ShelfSchema {
    inner: Schema,
}

impl ShelfSchema {
    /// Builds the schema over `store`.
    pub fn build(store: SharedStore) -> Result<Self, GqlError> {
        let inner = Schema::build(query::QUERY, Some(mutation::MUTATION), None)
            .register(types::book_type())
            .register(types::author_type())
            .register(query::query_root())
            .register(mutation::mutation_root())
            .data(store)
            .finish()?;
        tracing::trace!("schema built:\n{}", inner.sdl());
        Ok(ShelfSchema { inner })
    }

    /// Executes a request and returns the response envelope.
    ///
    /// Parse and validation failures come back as errors with no data.
    pub async fn execute(&self, request: impl Into<Request>) -> Response {
        self.inner.execute(request).await
    }

    /// Executes `document` with JSON `variables`.
    pub async fn execute_document(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Response {
        let mut request = Request::new(document);
        if let Some(variables) = variables {
            request = request.variables(Variables::from_json(variables));
        }
        self.execute(request).await
    }

    /// Executes each request of a batch in order.
    pub async fn execute_batch(&self, batch: BatchRequest) -> BatchResponse {
        self.inner.execute_batch(batch).await
    }

    /// The schema in GraphQL SDL.
    pub fn sdl(&self) -> String {
        self.inner.sdl()
    }
}

/// The store injected into the schema being executed.
pub(crate) fn store<'a>(ctx: &ResolverContext<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.ctx.data::<SharedStore>()
}
