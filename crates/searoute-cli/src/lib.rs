//! # searoute-cli: Command Line for the Route Optimizer
//!
//! Provides the `searoute` command-line interface.
//!
//! ## Subcommands
//!
//! - `searoute plan`: Plan the cheapest feasible route.
//! - `searoute ports`: Print the port table with neighbours.
//! - `searoute edges`: Print the precomputed edge table.
//! - `searoute check-network`: Validate a network manifest.
//!
//! Every subcommand except `check-network` runs over the network given by
//! the global `--network FILE` flag, or the built-in demonstration network.
//!
//! ```bash
//! searoute plan --from SIN --to LAX --deadline 1200
//! searoute --network lanes.yaml plan --from HKG --to DXB --overrides "HKG:650"
//! searoute check-network lanes.yaml
//! ```

pub mod network;
pub mod plan;
pub mod ports;

use std::path::Path;

use anyhow::{Context, Result};

use searoute_network::{demo_network, load_manifest, PortNetwork};

/// Load the manifest at `path`, or the built-in network when `None`.
pub fn load_network(path: Option<&Path>) -> Result<PortNetwork> {
    match path {
        Some(path) => load_manifest(path)
            .with_context(|| format!("failed to load network {}", path.display())),
        None => demo_network().context("built-in network is invalid"),
    }
}

/// Join a path of codes for display: `SIN -> PTY -> LAX`.
pub(crate) fn arrow_path<T: std::fmt::Display>(path: &[T]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_network_loads() {
        assert_eq!(load_network(None).unwrap().port_count(), 8);
    }

    #[test]
    fn missing_manifest_has_context() {
        let err = load_network(Some(Path::new("/nonexistent/lanes.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/lanes.yaml"));
    }

    #[test]
    fn arrow_path_joins() {
        assert_eq!(arrow_path(&["SIN", "PTY", "LAX"]), "SIN -> PTY -> LAX");
        assert_eq!(arrow_path::<&str>(&[]), "");
    }
}
