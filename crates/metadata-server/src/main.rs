//! metadata-server: REST server for the in-memory metadata directory.
//!
//! Reads config from env vars:
//!   METADATA_BIND_ADDR - listen address (default: 0.0.0.0:8080)
//!   RUST_LOG           - tracing filter (default: metadata_server=info,tower_http=debug)

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use metadata_server::handlers::AppState;
use metadata_server::router::build_router;

/// Default server address
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metadata_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr =
        std::env::var("METADATA_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let state = AppState::new();
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    tracing::info!(%bind_addr, "metadata-server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
