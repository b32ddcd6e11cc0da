//! # Port Network
//!
//! The immutable route graph: a port table, directional adjacency lists,
//! planner defaults, and the precomputed [`EdgeTable`].
//!
//! Networks are built through [`PortNetworkBuilder`], which accepts raw
//! strings and numbers and performs every check in [`build`](PortNetworkBuilder::build):
//!
//! - at least one port, and no duplicate codes
//! - every adjacency owner and neighbour refers to a known port
//! - no port lists itself
//! - coordinates and defaults are in range
//!
//! Neighbour lists keep their declared order with duplicates removed.
//! Adjacency is taken as written; one-way links are allowed and reported by
//! [`PortNetwork::asymmetric_links`].

use std::collections::BTreeMap;

use searoute_core::{GeoPoint, PlannerDefaults, Port, PortCode};

use crate::edge::{EdgeMetrics, EdgeTable, PairKey};
use crate::error::NetworkError;

/// An immutable, validated port network.
#[derive(Debug, Clone)]
pub struct PortNetwork {
    ports: BTreeMap<PortCode, Port>,
    adjacency: BTreeMap<PortCode, Vec<PortCode>>,
    defaults: PlannerDefaults,
    edges: EdgeTable,
}

impl PortNetwork {
    /// Start building a network.
    pub fn builder() -> PortNetworkBuilder {
        PortNetworkBuilder::default()
    }

    /// Look up a port.
    pub fn port(&self, code: &PortCode) -> Option<&Port> {
        self.ports.get(code)
    }

    /// Whether `code` is in the port table.
    pub fn contains(&self, code: &PortCode) -> bool {
        self.ports.contains_key(code)
    }

    /// All ports in code order.
    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.values()
    }

    /// Number of ports.
    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Ports directly reachable from `code`, in declared order. Empty for an
    /// unknown code or a port with no outgoing links.
    pub fn neighbors(&self, code: &PortCode) -> &[PortCode] {
        self.adjacency.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Defaults applied to requests that omit a parameter.
    pub fn defaults(&self) -> &PlannerDefaults {
        &self.defaults
    }

    /// The precomputed edge table.
    pub fn edges(&self) -> &EdgeTable {
        &self.edges
    }

    /// Distance and nominal time between two ports.
    ///
    /// Adjacent pairs come from the edge table; any other pair of known
    /// ports is computed from coordinates on the spot. `None` only when a
    /// code is unknown.
    pub fn edge_metrics(&self, a: &PortCode, b: &PortCode) -> Option<EdgeMetrics> {
        if let Some(metrics) = self.edges.get(a, b) {
            return Some(metrics);
        }
        let (pa, pb) = (self.ports.get(a)?, self.ports.get(b)?);
        Some(EdgeMetrics::between(pa, pb, self.defaults.reference_speed_kmh))
    }

    /// One-way links: every `(a, b)` with `b ∈ adj(a)` but `a ∉ adj(b)`.
    pub fn asymmetric_links(&self) -> Vec<(PortCode, PortCode)> {
        let mut links = Vec::new();
        for (a, neighbors) in &self.adjacency {
            for b in neighbors {
                if !self.neighbors(b).contains(a) {
                    links.push((a.clone(), b.clone()));
                }
            }
        }
        links
    }
}

#[derive(Debug, Clone)]
struct RawPort {
    code: String,
    name: String,
    lat: f64,
    lon: f64,
}

/// Collects raw port and adjacency declarations and validates them in
/// [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct PortNetworkBuilder {
    ports: Vec<RawPort>,
    adjacency: Vec<(String, Vec<String>)>,
    defaults: PlannerDefaults,
}

impl PortNetworkBuilder {
    /// Declare a port.
    pub fn port(mut self, code: impl Into<String>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        self.ports.push(RawPort {
            code: code.into(),
            name: name.into(),
            lat,
            lon,
        });
        self
    }

    /// Append directional links from `code` to each of `neighbors`.
    pub fn neighbors<I, S>(mut self, code: impl Into<String>, neighbors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = neighbors.into_iter().map(Into::into).collect();
        self.adjacency.push((code.into(), list));
        self
    }

    /// Link `a` and `b` in both directions.
    pub fn link(self, a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        self.neighbors(a.clone(), [b.clone()]).neighbors(b, [a])
    }

    /// Replace the planner defaults.
    pub fn defaults(mut self, defaults: PlannerDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Validate the declarations and build the network.
    ///
    /// # Errors
    ///
    /// Returns the first [`NetworkError`] found, checking ports, then
    /// defaults, then adjacency.
    pub fn build(self) -> Result<PortNetwork, NetworkError> {
        if self.ports.is_empty() {
            return Err(NetworkError::Empty);
        }

        let mut ports = BTreeMap::new();
        for raw in self.ports {
            let code = PortCode::parse(&raw.code)?;
            let location = GeoPoint::new(raw.lat, raw.lon)?;
            if ports.contains_key(&code) {
                return Err(NetworkError::DuplicatePort(code));
            }
            ports.insert(code.clone(), Port::new(code, raw.name, location));
        }

        self.defaults.validate()?;

        let mut adjacency: BTreeMap<PortCode, Vec<PortCode>> = BTreeMap::new();
        for (owner_raw, list) in self.adjacency {
            let owner = resolve(&ports, &owner_raw, &owner_raw)?;
            let entry = adjacency.entry(owner.clone()).or_default();
            for neighbor_raw in list {
                let neighbor = resolve(&ports, &owner_raw, &neighbor_raw)?;
                if neighbor == owner {
                    return Err(NetworkError::SelfLoop(owner));
                }
                if !entry.contains(&neighbor) {
                    entry.push(neighbor);
                }
            }
        }

        let speed = self.defaults.reference_speed_kmh;
        let mut edges = EdgeTable::default();
        for (a, neighbors) in &adjacency {
            for b in neighbors {
                edges.insert_if_absent(PairKey::new(a, b), || {
                    EdgeMetrics::between(&ports[a], &ports[b], speed)
                });
            }
        }

        tracing::debug!(
            ports = ports.len(),
            edges = edges.len(),
            reference_speed_kmh = speed,
            "port network built"
        );

        Ok(PortNetwork {
            ports,
            adjacency,
            defaults: self.defaults,
            edges,
        })
    }
}

fn resolve(ports: &BTreeMap<PortCode, Port>, owner: &str, raw: &str) -> Result<PortCode, NetworkError> {
    let unknown = || NetworkError::UnknownNeighbor {
        owner: owner.to_string(),
        code: raw.to_string(),
    };
    let code = PortCode::parse(raw).map_err(|_| unknown())?;
    if ports.contains_key(&code) {
        Ok(code)
    } else {
        Err(unknown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> PortCode {
        PortCode::parse(s).unwrap()
    }

    fn triangle() -> PortNetworkBuilder {
        PortNetwork::builder()
            .port("AAA", "Alpha", 0.0, 0.0)
            .port("BBB", "Bravo", 0.0, 10.0)
            .port("CCC", "Charlie", 10.0, 0.0)
    }

    #[test]
    fn network_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PortNetwork>();
    }

    #[test]
    fn builds_and_precomputes_edges() {
        let net = triangle().link("AAA", "BBB").link("BBB", "CCC").build().unwrap();
        assert_eq!(net.port_count(), 3);
        assert_eq!(net.edges().len(), 2);
        assert_eq!(net.neighbors(&code("BBB")), &[code("AAA"), code("CCC")]);
        assert!(net.asymmetric_links().is_empty());
    }

    #[test]
    fn neighbour_lists_are_deduplicated_in_order() {
        let net = triangle()
            .neighbors("AAA", ["CCC", "BBB", "CCC"])
            .neighbors("aaa", ["BBB"])
            .build()
            .unwrap();
        assert_eq!(net.neighbors(&code("AAA")), &[code("CCC"), code("BBB")]);
    }

    #[test]
    fn unknown_code_has_no_neighbours() {
        let net = triangle().build().unwrap();
        assert!(net.neighbors(&code("ZZZ")).is_empty());
        assert!(net.neighbors(&code("AAA")).is_empty());
    }

    #[test]
    fn edge_metrics_fall_back_to_coordinates() {
        let net = triangle().link("AAA", "BBB").build().unwrap();
        let cached = net.edge_metrics(&code("BBB"), &code("AAA")).unwrap();
        assert_eq!(Some(cached), net.edges().get(&code("AAA"), &code("BBB")));

        let computed = net.edge_metrics(&code("AAA"), &code("CCC")).unwrap();
        assert!(computed.distance_km > 1000.0);
        assert_eq!(net.edges().len(), 1);
        assert!(net.edge_metrics(&code("AAA"), &code("ZZZ")).is_none());
    }

    #[test]
    fn reports_one_way_links() {
        let net = triangle().neighbors("AAA", ["BBB"]).build().unwrap();
        assert_eq!(net.asymmetric_links(), vec![(code("AAA"), code("BBB"))]);
    }

    #[test]
    fn rejects_empty_network() {
        assert!(matches!(PortNetwork::builder().build(), Err(NetworkError::Empty)));
    }

    #[test]
    fn rejects_duplicate_port() {
        let err = triangle().port("aaa", "Again", 1.0, 1.0).build().unwrap_err();
        assert!(matches!(err, NetworkError::DuplicatePort(c) if c.as_str() == "AAA"));
    }

    #[test]
    fn rejects_unknown_neighbour() {
        let err = triangle().neighbors("AAA", ["ZZZ"]).build().unwrap_err();
        assert!(matches!(err, NetworkError::UnknownNeighbor { ref code, .. } if code == "ZZZ"));

        let err = triangle().neighbors("ZZZ", ["AAA"]).build().unwrap_err();
        assert!(matches!(err, NetworkError::UnknownNeighbor { ref owner, .. } if owner == "ZZZ"));
    }

    #[test]
    fn rejects_self_loop() {
        let err = triangle().neighbors("AAA", ["AAA"]).build().unwrap_err();
        assert!(matches!(err, NetworkError::SelfLoop(_)));
    }

    #[test]
    fn rejects_bad_coordinates_and_defaults() {
        let err = triangle().port("DDD", "Delta", 91.0, 0.0).build().unwrap_err();
        assert!(matches!(err, NetworkError::Validation(_)));

        let bad = PlannerDefaults {
            fuel_price_per_km: -1.0,
            ..PlannerDefaults::default()
        };
        let err = triangle().defaults(bad).build().unwrap_err();
        assert!(matches!(err, NetworkError::Validation(_)));
    }
}
