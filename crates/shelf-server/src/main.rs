//! Binary entrypoint for the shelf GraphQL server.
//!
//! Configuration comes from environment variables, see [`ServerConfig`].
//! Log filtering follows `RUST_LOG` (default: "info").

use shelf_server::config::ServerConfig;
use shelf_server::error::ServerError;
use shelf_server::router::build_router;
use shelf_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config)?;
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(graphiql = config.graphiql, "shelf server running on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
