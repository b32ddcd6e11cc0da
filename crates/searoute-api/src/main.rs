//! # searoute-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for the route optimizer.
//! Binds to configurable port (default 8080).

use searoute_api::state::{AppConfig, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();

    // Initialize structured tracing.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let metrics = if config.metrics_enabled {
        Some(searoute_api::middleware::metrics::install_recorder().map_err(|e| {
            tracing::error!("Metrics initialization failed: {e}");
            e
        })?)
    } else {
        tracing::info!("Metrics disabled; /metrics will return 404");
        None
    };

    let port = config.port;
    let state = searoute_api::bootstrap::bootstrap(config, metrics).map_err(|e| {
        tracing::error!("Bootstrap failed: {e}");
        e
    })?;

    let app = searoute_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Searoute API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
