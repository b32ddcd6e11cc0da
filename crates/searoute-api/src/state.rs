//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. The planner and its network are immutable, so the
//! state is a pair of `Arc`s and clones are cheap.

use std::path::PathBuf;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use searoute_planner::RoutePlanner;

/// Log output format for the server binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Server configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to (`PORT`, default 8080).
    pub port: u16,
    /// Network manifest to load (`SEAROUTE_NETWORK`). `None` uses the
    /// built-in demonstration network.
    pub network_path: Option<PathBuf>,
    /// Install the Prometheus recorder and serve `/metrics`
    /// (`SEAROUTE_METRICS_ENABLED`, default true).
    pub metrics_enabled: bool,
    /// Log format (`SEAROUTE_LOG_FORMAT=json`, default text).
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            network_path: None,
            metrics_enabled: true,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Unparseable values fall back to
    /// their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "PORT is not a valid port number, using {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let network_path = lookup("SEAROUTE_NETWORK")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let metrics_enabled = match lookup("SEAROUTE_METRICS_ENABLED") {
            Some(raw) => !matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
            None => defaults.metrics_enabled,
        };

        let log_format = match lookup("SEAROUTE_LOG_FORMAT") {
            Some(raw) if raw.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            port,
            network_path,
            metrics_enabled,
            log_format,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: AppConfig,
    /// Route planner over the loaded network.
    pub planner: Arc<RoutePlanner>,
    /// Prometheus render handle, when the recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("ports", &self.planner.network().port_count())
            .field("metrics", &self.metrics.as_ref().map(|_| "[installed]"))
            .finish()
    }
}

impl AppState {
    /// State with default configuration and no metrics recorder.
    pub fn new(planner: RoutePlanner) -> Self {
        Self::with_config(AppConfig::default(), planner, None)
    }

    /// State with explicit configuration.
    pub fn with_config(
        config: AppConfig,
        planner: RoutePlanner,
        metrics: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            config,
            planner: Arc::new(planner),
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "9090"),
            ("SEAROUTE_NETWORK", "/etc/searoute/net.yaml"),
            ("SEAROUTE_METRICS_ENABLED", "false"),
            ("SEAROUTE_LOG_FORMAT", "JSON"),
        ]));
        assert_eq!(config.port, 9090);
        assert_eq!(config.network_path, Some(PathBuf::from("/etc/searoute/net.yaml")));
        assert!(!config.metrics_enabled);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "eighty"),
            ("SEAROUTE_NETWORK", "  "),
            ("SEAROUTE_LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.network_path, None);
        assert_eq!(config.log_format, LogFormat::Text);
    }
}
