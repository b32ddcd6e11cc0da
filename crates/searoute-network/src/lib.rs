//! # searoute-network: Static Route-Graph Configuration
//!
//! The port table, adjacency, and derived edge metrics the planner runs
//! over. A [`PortNetwork`] is constructed explicitly (from a builder, a YAML
//! manifest, or the built-in demonstration data) and is immutable afterwards,
//! so it can be shared across threads without locks.
//!
//! - **Network** (`network.rs`): [`PortNetwork`] and its validating
//!   [`PortNetworkBuilder`].
//! - **Edge** (`edge.rs`): [`PairKey`], [`EdgeMetrics`], and the memoised
//!   [`EdgeTable`].
//! - **Manifest** (`manifest.rs`): YAML network manifests via `serde_yaml`.
//! - **Builtin** (`builtin.rs`): the eight-port demonstration network.
//!
//! ## Crate Policy
//!
//! - Depends only on `searoute-core` internally.
//! - No interior mutability: lookups of pairs missing from the edge table
//!   are recomputed, never cached.

pub mod builtin;
pub mod edge;
pub mod error;
pub mod manifest;
pub mod network;

pub use builtin::demo_network;
pub use edge::{EdgeMetrics, EdgeTable, PairKey};
pub use error::NetworkError;
pub use manifest::{load_manifest, NetworkManifest, PortEntry};
pub use network::{PortNetwork, PortNetworkBuilder};
