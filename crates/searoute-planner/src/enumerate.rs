//! # Simple-Path Enumeration
//!
//! Depth-first enumeration of every simple path from a source to a
//! destination with at most `max_hops` edges, driven by an explicit frontier
//! stack so deep graphs never recurse.
//!
//! The iterator is lazy: each call to `next` expands frontier paths only
//! until the next complete path is found. Paths are produced in no
//! particular order.

use std::collections::VecDeque;

use searoute_core::PortCode;
use searoute_network::PortNetwork;

/// Enumerate simple paths `source → destination` with at most `max_hops`
/// edges.
///
/// Yields nothing when either endpoint is not in the network, when
/// `source == destination`, or when `max_hops` is zero.
pub fn enumerate_paths<'a>(
    network: &'a PortNetwork,
    source: &PortCode,
    destination: &PortCode,
    max_hops: usize,
) -> SimplePaths<'a> {
    let viable = network.contains(source)
        && network.contains(destination)
        && source != destination
        && max_hops > 0;
    let frontier = if viable {
        vec![vec![source.clone()]]
    } else {
        Vec::new()
    };
    SimplePaths {
        network,
        destination: destination.clone(),
        max_hops,
        frontier,
        ready: VecDeque::new(),
    }
}

/// Lazy iterator over simple paths. Created by [`enumerate_paths`].
#[derive(Debug, Clone)]
pub struct SimplePaths<'a> {
    network: &'a PortNetwork,
    destination: PortCode,
    max_hops: usize,
    // Every frontier path has fewer than `max_hops` edges.
    frontier: Vec<Vec<PortCode>>,
    ready: VecDeque<Vec<PortCode>>,
}

impl Iterator for SimplePaths<'_> {
    type Item = Vec<PortCode>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(path) = self.ready.pop_front() {
                return Some(path);
            }
            let path = self.frontier.pop()?;
            let Some(current) = path.last() else {
                continue;
            };
            // `path.len()` is the edge count of any one-step extension.
            let can_extend = path.len() < self.max_hops;
            for neighbor in self.network.neighbors(current) {
                if path.contains(neighbor) {
                    continue;
                }
                if *neighbor == self.destination {
                    let mut done = path.clone();
                    done.push(neighbor.clone());
                    self.ready.push_back(done);
                } else if can_extend {
                    let mut next = path.clone();
                    next.push(neighbor.clone());
                    self.frontier.push(next);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use searoute_network::demo_network;

    use super::*;

    fn code(s: &str) -> PortCode {
        PortCode::parse(s).unwrap()
    }

    fn paths(net: &PortNetwork, from: &str, to: &str, max_hops: usize) -> BTreeSet<String> {
        enumerate_paths(net, &code(from), &code(to), max_hops)
            .map(|p| p.iter().map(PortCode::as_str).collect::<Vec<_>>().join("-"))
            .collect()
    }

    #[test]
    fn sin_to_lax_enumerates_seven_paths() {
        let net = demo_network().unwrap();
        let found = paths(&net, "SIN", "LAX", 6);
        let expected: BTreeSet<String> = [
            "SIN-PTY-LAX",
            "SIN-SHA-DXB-LAX",
            "SIN-SHA-HKG-DXB-LAX",
            "SIN-SHA-IDX-HKG-DXB-LAX",
            "SIN-HKG-DXB-LAX",
            "SIN-HKG-SHA-DXB-LAX",
            "SIN-HKG-IDX-SHA-DXB-LAX",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn hop_limit_is_inclusive() {
        let net = demo_network().unwrap();
        assert!(paths(&net, "SIN", "LAX", 1).is_empty());
        assert_eq!(paths(&net, "SIN", "LAX", 2).len(), 1);
        assert_eq!(paths(&net, "SIN", "LAX", 3).len(), 3);
    }

    #[test]
    fn same_endpoint_yields_nothing() {
        let net = demo_network().unwrap();
        assert!(paths(&net, "HKG", "HKG", 6).is_empty());
    }

    #[test]
    fn unknown_endpoints_yield_nothing() {
        let net = demo_network().unwrap();
        assert!(paths(&net, "ZZZ", "LAX", 6).is_empty());
        assert!(paths(&net, "SIN", "ZZZ", 6).is_empty());
        assert!(paths(&net, "SIN", "LAX", 0).is_empty());
    }

    #[test]
    fn one_way_port_is_never_a_destination() {
        let net = demo_network().unwrap();
        assert!(paths(&net, "SIN", "CNS", 6).is_empty());
        assert!(!paths(&net, "CNS", "SIN", 6).is_empty());
    }

    #[test]
    fn iterator_is_lazy() {
        let net = demo_network().unwrap();
        let mut iter = enumerate_paths(&net, &code("SIN"), &code("LAX"), 6);
        let first = iter.next().unwrap();
        assert_eq!(first.first(), Some(&code("SIN")));
        assert_eq!(first.last(), Some(&code("LAX")));
        assert_eq!(iter.count(), 6);
    }
}
