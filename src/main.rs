//! Bloom API Server
//!
//! Run with: cargo run --bin bloom
//!
//! # Configuration
//!
//! Reads `config.toml` from the user config dir, `/etc/bloom/` or the
//! working directory. Environment variables override the file:
//! - `BLOOM_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `BLOOM_API_PORT`: Port to listen on (default: 8086)
//! - `BLOOM_SAMPLE_DATA`: Start from the sample data (default: true)
//! - `BLOOM_LOG_LEVEL`, `BLOOM_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter directive, wins over `BLOOM_LOG_LEVEL`

use anyhow::Context;
use bloom::api::{serve, ApiConfig, AppState};
use bloom::config::Config;
use bloom::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting Bloom API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Sample data: {}", config.seed.sample_data);

    let api_config = ApiConfig::from(&config.api);
    let state = AppState::from_config(&config);

    tracing::info!(
        topics = state.topics.len(),
        "Starting server on {}:{}",
        api_config.host,
        api_config.port
    );
    serve(state, &api_config)
        .await
        .with_context(|| format!("API server on {} failed", api_config.addr()))?;

    tracing::info!("Bloom API server stopped");
    Ok(())
}
