//! The GraphQL endpoint and its exploration page.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLBatchRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::state::AppState;

/// Executes a single request or a batch against the schema.
///
/// `POST /graphql`
pub async fn execute(State(state): State<AppState>, req: GraphQLBatchRequest) -> GraphQLResponse {
    state.schema.execute_batch(req.into_inner()).await.into()
}

/// Serves the GraphiQL page pointed at this endpoint.
///
/// `GET /graphql`
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
