//! Production entrypoint for the Empress RAG gateway.
//!
//! Starts the REST gateway on the configured port and binds all interfaces so
//! the API is reachable from outside the host. Every domain operation is
//! delegated to the RAG pipeline collaborator; this binary wires in the
//! placeholder pipeline until a retrieval backend is connected.
//!
//! # Environment Variables
//! - `PORT`: Listening port (default: 8000)
//!
//! # Returns
//! * `Ok(())` - If the server starts and runs successfully
//!
//! # Errors
//! Returns an error if:
//! - the logging/tracing configuration cannot be initialised,
//! - the server address cannot be bound, or
//! - the HTTP server fails while running.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use empress_core::NullPipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".into());
    let addr = format!("0.0.0.0:{port}");

    tracing::info!("++ Starting Empress RAG gateway on {}", addr);

    let app = api_rest::router(Arc::new(NullPipeline));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
