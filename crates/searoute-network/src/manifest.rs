//! # Network Manifests
//!
//! YAML description of a port network:
//!
//! ```yaml
//! defaults:            # optional, every field optional
//!   handling_cost: 500.0
//! ports:
//!   - { code: SIN, name: Singapore, lat: 1.3521, lon: 103.8198 }
//!   - { code: HKG, name: Hong Kong, lat: 22.3193, lon: 114.1694 }
//! adjacency:
//!   SIN: [HKG]
//!   HKG: [SIN]
//! symmetric: false     # optional; true adds the reverse of every link
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use searoute_core::PlannerDefaults;

use crate::error::NetworkError;
use crate::network::PortNetwork;

/// One entry of the `ports:` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortEntry {
    /// Port code.
    pub code: String,
    /// Display name. Falls back to the code.
    #[serde(default)]
    pub name: Option<String>,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Deserialized manifest, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkManifest {
    /// Planner defaults.
    #[serde(default)]
    pub defaults: PlannerDefaults,
    /// Port table.
    pub ports: Vec<PortEntry>,
    /// Port code to directly reachable codes.
    #[serde(default)]
    pub adjacency: BTreeMap<String, Vec<String>>,
    /// Mirror every link so adjacency becomes symmetric.
    #[serde(default)]
    pub symmetric: bool,
}

impl NetworkManifest {
    /// Parse a manifest from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, NetworkError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validate the manifest and build the network.
    ///
    /// One-way links are permitted but logged at `warn`.
    pub fn into_network(self) -> Result<PortNetwork, NetworkError> {
        let mut builder = PortNetwork::builder().defaults(self.defaults);
        for entry in self.ports {
            let name = entry.name.unwrap_or_else(|| entry.code.clone());
            builder = builder.port(entry.code, name, entry.lat, entry.lon);
        }
        for (owner, neighbors) in self.adjacency {
            if self.symmetric {
                for neighbor in &neighbors {
                    builder = builder.neighbors(neighbor.clone(), [owner.clone()]);
                }
            }
            builder = builder.neighbors(owner, neighbors);
        }

        let network = builder.build()?;
        for (from, to) in network.asymmetric_links() {
            tracing::warn!(%from, %to, "one-way link: {to} does not list {from}");
        }
        Ok(network)
    }
}

/// Read, parse, and validate a manifest file.
pub fn load_manifest(path: &Path) -> Result<PortNetwork, NetworkError> {
    let text = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let network = NetworkManifest::from_yaml_str(&text)?.into_network()?;
    tracing::info!(
        path = %path.display(),
        ports = network.port_count(),
        "loaded network manifest"
    );
    Ok(network)
}
