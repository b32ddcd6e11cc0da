//! # Server Bootstrap
//!
//! Loads the port network and assembles [`AppState`] at startup.
//!
//! ## Bootstrap Sequence
//!
//! 1. **Load Network**: From the manifest at `SEAROUTE_NETWORK`, or the
//!    built-in demonstration network when unset.
//! 2. **Report Topology**: One warning per one-way link.
//! 3. **Log Banner**: Structured startup summary.
//!
//! A manifest that fails to load or validate aborts startup; the server
//! never falls back to the built-in network when a path was given.

use searoute_network::{demo_network, load_manifest, NetworkError, PortNetwork};
use searoute_planner::RoutePlanner;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::state::{AppConfig, AppState};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors during server bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The network could not be loaded or failed validation.
    #[error("network configuration error: {0}")]
    Network(#[from] NetworkError),

    /// The Prometheus recorder could not be installed.
    #[error("metrics recorder error: {0}")]
    Metrics(String),
}

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// Load the network named by `config`.
pub fn load_network(config: &AppConfig) -> Result<PortNetwork, BootstrapError> {
    let network = match &config.network_path {
        Some(path) => load_manifest(path)?,
        None => {
            tracing::info!("SEAROUTE_NETWORK not set, using built-in demonstration network");
            demo_network()?
        }
    };
    Ok(network)
}

/// Build application state from configuration.
///
/// `metrics` is the handle returned by
/// [`install_recorder`](crate::middleware::metrics::install_recorder), if
/// the recorder was installed.
pub fn bootstrap(
    config: AppConfig,
    metrics: Option<PrometheusHandle>,
) -> Result<AppState, BootstrapError> {
    let network = load_network(&config)?;
    let one_way = network.asymmetric_links();

    tracing::info!(
        source = %config
            .network_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin:demo".to_string()),
        ports = network.port_count(),
        edges = network.edges().len(),
        one_way_links = one_way.len(),
        max_hops = network.defaults().max_hops,
        metrics = metrics.is_some(),
        "searoute network ready"
    );

    Ok(AppState::with_config(config, RoutePlanner::new(network), metrics))
}
