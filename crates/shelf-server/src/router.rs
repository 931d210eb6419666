//! Router assembly for the shelf HTTP API.
//!
//! [`build_router`] mounts the single `/graphql` endpoint with CORS and
//! tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the axum router.
///
/// `POST /graphql` executes documents. `GET /graphql` serves GraphiQL only
/// when [`AppState::graphiql`] is set; otherwise GET is not routed.
pub fn build_router(state: AppState) -> Router {
    let endpoint = if state.graphiql {
        get(handlers::graphql::graphiql).post(handlers::graphql::execute)
    } else {
        post(handlers::graphql::execute)
    };

    Router::new()
        .route("/graphql", endpoint)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
