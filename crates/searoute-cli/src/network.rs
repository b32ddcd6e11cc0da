//! # Check-Network Subcommand
//!
//! Validates a YAML network manifest: every port code and coordinate, every
//! adjacency reference, and the planner defaults. One-way links are legal
//! and reported as warnings.
//!
//! Exit codes: 0 when the manifest is valid, 1 when it is not.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use searoute_network::load_manifest;

/// Arguments for the `searoute check-network` subcommand.
#[derive(Args, Debug)]
pub struct CheckNetworkArgs {
    /// Manifest to validate.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

/// Execute the check-network subcommand.
pub fn run_check_network(args: &CheckNetworkArgs) -> Result<u8> {
    let network = match load_manifest(&args.path) {
        Ok(network) => network,
        Err(e) => {
            println!("FAIL: {}: {e}", args.path.display());
            return Ok(1);
        }
    };

    println!(
        "OK: {}: {} ports, {} edges",
        args.path.display(),
        network.port_count(),
        network.edges().len()
    );

    let one_way = network.asymmetric_links();
    for (from, to) in &one_way {
        println!("  WARN: one-way link {from} -> {to} ({to} does not list {from})");
    }
    if !one_way.is_empty() {
        println!("{} one-way link(s); their targets may be unreachable.", one_way.len());
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn valid_manifest_passes() {
        let file = write(
            "ports:\n  - { code: AAA, lat: 0, lon: 0 }\n  - { code: BBB, lat: 1, lon: 1 }\nadjacency:\n  AAA: [BBB]\n",
        );
        let args = CheckNetworkArgs {
            path: file.path().to_path_buf(),
        };
        assert_eq!(run_check_network(&args).unwrap(), 0);
    }

    #[test]
    fn invalid_manifest_fails() {
        let file = write("ports:\n  - { code: AAA, lat: 0, lon: 0 }\nadjacency:\n  AAA: [ZZZ]\n");
        let args = CheckNetworkArgs {
            path: file.path().to_path_buf(),
        };
        assert_eq!(run_check_network(&args).unwrap(), 1);
    }

    #[test]
    fn missing_file_fails() {
        let args = CheckNetworkArgs {
            path: PathBuf::from("/nonexistent/lanes.yaml"),
        };
        assert_eq!(run_check_network(&args).unwrap(), 1);
    }
}
