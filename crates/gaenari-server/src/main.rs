//! Binary entrypoint for the gaenari program server.
//!
//! Reads configuration from environment variables (see [`ServerConfig`]):
//! - `GAENARI_DB_PATH`: SQLite database file path, or `:memory:` (default: "gaenari.db")
//! - `GAENARI_HOST`: bind host (default: "0.0.0.0")
//! - `GAENARI_PORT`: listen port (default: "3000")

use std::process;

use tracing_subscriber::EnvFilter;

use gaenari_server::config::ServerConfig;
use gaenari_server::router::build_router;
use gaenari_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("server stopped: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config.db_path)?;
    let app = build_router(state);

    let addr = config.bind_address();
    tracing::info!(db_path = %config.db_path, "gaenari server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
