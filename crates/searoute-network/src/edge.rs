//! # Edge Metrics
//!
//! Distance and nominal travel time for each adjacent port pair, computed
//! once when the network is built and keyed by an order-independent
//! [`PairKey`]. Nominal times use the network's reference speed and are
//! advisory: the scorer always divides by the caller's speed.

use std::collections::BTreeMap;

use serde::Serialize;

use searoute_core::{haversine_km, Port, PortCode};

/// Unordered pair of port codes. `PairKey::new(a, b) == PairKey::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairKey {
    low: PortCode,
    high: PortCode,
}

impl PairKey {
    /// Build the key for `a` and `b` in either order.
    pub fn new(a: &PortCode, b: &PortCode) -> Self {
        if a <= b {
            Self {
                low: a.clone(),
                high: b.clone(),
            }
        } else {
            Self {
                low: b.clone(),
                high: a.clone(),
            }
        }
    }

    /// The lexicographically smaller code.
    pub fn low(&self) -> &PortCode {
        &self.low
    }

    /// The lexicographically larger code.
    pub fn high(&self) -> &PortCode {
        &self.high
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Derived metrics for one port pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeMetrics {
    /// Great-circle distance in kilometres.
    pub distance_km: f64,
    /// Travel time in hours at the reference speed.
    pub nominal_time_h: f64,
}

impl EdgeMetrics {
    /// Compute metrics between two ports at `reference_speed_kmh`.
    pub fn between(a: &Port, b: &Port, reference_speed_kmh: f64) -> Self {
        let distance_km = haversine_km(a.location, b.location);
        Self {
            distance_km,
            nominal_time_h: distance_km / reference_speed_kmh,
        }
    }
}

/// Memoised metrics for every adjacent pair.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    edges: BTreeMap<PairKey, EdgeMetrics>,
}

impl EdgeTable {
    pub(crate) fn insert_if_absent(&mut self, key: PairKey, compute: impl FnOnce() -> EdgeMetrics) {
        self.edges.entry(key).or_insert_with(compute);
    }

    /// Cached metrics for the pair, if it is adjacent.
    pub fn get(&self, a: &PortCode, b: &PortCode) -> Option<EdgeMetrics> {
        self.edges.get(&PairKey::new(a, b)).copied()
    }

    /// All cached pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &EdgeMetrics)> {
        self.edges.iter()
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
