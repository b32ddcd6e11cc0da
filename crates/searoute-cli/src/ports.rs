//! # Ports & Edges Subcommands

use anyhow::Result;

use searoute_network::PortNetwork;

/// Execute the ports subcommand.
pub fn run_ports(network: &PortNetwork) -> Result<u8> {
    print!("{}", render_ports(network));
    Ok(0)
}

/// Execute the edges subcommand.
pub fn run_edges(network: &PortNetwork) -> Result<u8> {
    print!("{}", render_edges(network));
    Ok(0)
}

/// Port table: code, name, coordinates, neighbours.
pub fn render_ports(network: &PortNetwork) -> String {
    let mut out = format!(
        "{:<8}  {:<20}  {:>9}  {:>10}  NEIGHBORS\n",
        "CODE", "NAME", "LAT", "LON"
    );
    for port in network.ports() {
        let neighbors: Vec<&str> = network
            .neighbors(&port.code)
            .iter()
            .map(|c| c.as_str())
            .collect();
        out.push_str(&format!(
            "{:<8}  {:<20}  {:>9.4}  {:>10.4}  {}\n",
            port.code,
            port.name,
            port.location.lat(),
            port.location.lon(),
            neighbors.join(", ")
        ));
    }
    out
}

/// Edge table: unordered pair, distance, nominal time.
pub fn render_edges(network: &PortNetwork) -> String {
    let mut out = format!(
        "{:<12}  {:>12}  {:>10}   (at {} km/h)\n",
        "PAIR",
        "DIST_KM",
        "TIME_H",
        network.defaults().reference_speed_kmh
    );
    for (pair, metrics) in network.edges().iter() {
        out.push_str(&format!(
            "{:<12}  {:>12.2}  {:>10.2}\n",
            pair.to_string(),
            metrics.distance_km,
            metrics.nominal_time_h
        ));
    }
    out
}
