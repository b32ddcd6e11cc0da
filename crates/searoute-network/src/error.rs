//! # Network Errors
//!
//! Failures while building or loading a [`PortNetwork`](crate::PortNetwork).
//! All of them are configuration errors surfaced at startup.

use std::path::PathBuf;

use searoute_core::{PortCode, ValidationError};
use thiserror::Error;

/// Errors raised while constructing a network.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The network has no ports.
    #[error("network has no ports")]
    Empty,

    /// Two ports share a code.
    #[error("duplicate port code: {0}")]
    DuplicatePort(PortCode),

    /// An adjacency entry refers to a port that is not in the port table.
    #[error("adjacency of {owner} refers to unknown port {code}")]
    UnknownNeighbor {
        /// The adjacency list's owner (or the unknown owner itself).
        owner: String,
        /// The missing code.
        code: String,
    },

    /// A port lists itself as a neighbour.
    #[error("port {0} lists itself as a neighbour")]
    SelfLoop(PortCode),

    /// A port code, coordinate, or default failed validation.
    #[error("invalid network entry: {0}")]
    Validation(#[from] ValidationError),

    /// The manifest file could not be read.
    #[error("failed to read network manifest {path}: {source}")]
    Io {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid YAML for the expected shape.
    #[error("failed to parse network manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_neighbor_message() {
        let err = NetworkError::UnknownNeighbor {
            owner: "SIN".into(),
            code: "XXX".into(),
        };
        assert_eq!(err.to_string(), "adjacency of SIN refers to unknown port XXX");
    }

    #[test]
    fn validation_converts() {
        let err: NetworkError = ValidationError::InvalidPortCode("?".into()).into();
        assert!(matches!(err, NetworkError::Validation(_)));
    }
}
