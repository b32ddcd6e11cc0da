//! Built-in demonstration network, embedded from `networks/demo.yaml`.

use crate::error::NetworkError;
use crate::manifest::NetworkManifest;
use crate::network::PortNetwork;

/// YAML source of the demonstration network.
pub const DEMO_MANIFEST: &str = include_str!("../networks/demo.yaml");

/// The eight-port demonstration network (IDX, HKG, SIN, CNS, SHA, PTY, LAX,
/// DXB). CNS links are one-way, so CNS is never reachable as a destination.
pub fn demo_network() -> Result<PortNetwork, NetworkError> {
    NetworkManifest::from_yaml_str(DEMO_MANIFEST)?.into_network()
}
