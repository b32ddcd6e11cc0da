//! # searoute CLI entry point
//!
//! Parses command-line arguments, loads the port network and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use searoute_cli::load_network;
use searoute_cli::network::{run_check_network, CheckNetworkArgs};
use searoute_cli::plan::{run_plan, PlanArgs};
use searoute_cli::ports::{run_edges, run_ports};

/// Searoute: deadline-constrained shipping route optimizer.
///
/// Enumerates simple routes through a port network, prices each one by
/// handling and fuel cost, and picks the cheapest that arrives in time.
#[derive(Parser, Debug)]
#[command(name = "searoute", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Network manifest (YAML). Defaults to the built-in demonstration network.
    #[arg(long, global = true, value_name = "FILE")]
    network: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plan the cheapest route that meets a deadline.
    Plan(PlanArgs),

    /// List ports with coordinates and neighbours.
    Ports,

    /// List precomputed edge distances and nominal times.
    Edges,

    /// Validate a network manifest and report one-way links.
    CheckNetwork(CheckNetworkArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let network = cli.network.as_deref();
    let result = match cli.command {
        Commands::Plan(args) => load_network(network).and_then(|net| run_plan(&args, net)),
        Commands::Ports => load_network(network).and_then(|net| run_ports(&net)),
        Commands::Edges => load_network(network).and_then(|net| run_edges(&net)),
        Commands::CheckNetwork(args) => run_check_network(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
