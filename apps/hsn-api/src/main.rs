//! HSN Code Validation Service
//!
//! Loads the reference master table once at startup, then serves the code
//! check either over HTTP or through an interactive terminal prompt,
//! selected by `TERMINAL_MODE`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use hsn_api::config::{RunMode, ServerConfig};
use hsn_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hsn_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = ServerConfig::from_env();

    // A missing or malformed dataset must abort before any serving begins.
    info!(path = %config.master_path.display(), "loading HSN master data");
    let state = AppState::new(&config)?;

    match config.mode {
        RunMode::Terminal => {
            hsn_api::terminal::run(&state.table)?;
        }
        RunMode::Http => {
            let app = hsn_api::router(Arc::new(state));

            let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
            info!("Starting HSN validation API on http://{}", addr);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
