//! # Cost & Time Scoring
//!
//! A path's cost is the handling charge at every port it touches (origin and
//! destination included) plus, for each edge, distance × fuel price ×
//! capacity factor. Its time is the sum of distance / speed over its edges.
//!
//! Edge times always use the caller's speed; the nominal times stored in
//! the edge table are never reused here. Totals are accumulated unrounded
//! and rounded to two decimals once at the end.

use serde::Serialize;

use searoute_core::{capacity_factor, round2, HandlingOverrides, PlanError, PortCode, ValidationError};
use searoute_network::PortNetwork;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Resolved cost parameters for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct CostParams {
    /// Vessel capacity in tons.
    pub capacity_tons: f64,
    /// Vessel speed in km/h.
    pub speed_kmh: f64,
    /// Fuel price per km.
    pub fuel_price_per_km: f64,
    /// Handling cost for ports without an override.
    pub default_handling_cost: f64,
    /// Per-port handling costs.
    pub overrides: HandlingOverrides,
}

impl CostParams {
    /// Check every numeric parameter.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidParameter`] for a non-finite or
    /// non-positive capacity, speed, or fuel price, a negative default
    /// handling cost, or a negative override.
    pub fn validate(&self) -> Result<(), ValidationError> {
        positive("capacity", self.capacity_tons)?;
        positive("speed", self.speed_kmh)?;
        positive("fuel_price", self.fuel_price_per_km)?;
        if !(self.default_handling_cost.is_finite() && self.default_handling_cost >= 0.0) {
            return Err(ValidationError::parameter(
                "handling_cost",
                self.default_handling_cost,
                "must be a non-negative number",
            ));
        }
        if let Some((code, cost)) = self
            .overrides
            .iter()
            .find(|(_, cost)| !(cost.is_finite() && *cost >= 0.0))
        {
            return Err(ValidationError::parameter(
                "overrides",
                format!("{code}:{cost}"),
                "must be a non-negative number",
            ));
        }
        Ok(())
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::parameter(name, value, "must be a positive number"))
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score of a single path. Monetary and time values are rounded to two
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathScore {
    /// Total cost: handling plus fuel.
    pub cost: f64,
    /// Total travel time in hours.
    pub time_h: f64,
    /// Total great-circle distance in km.
    pub distance_km: f64,
    /// Handling component of `cost`.
    pub handling_cost: f64,
    /// Fuel component of `cost`.
    pub fuel_cost: f64,
    /// Number of edges.
    pub hops: usize,
}

/// Scores paths over a network with fixed parameters.
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    network: &'a PortNetwork,
    params: &'a CostParams,
}

impl<'a> CostModel<'a> {
    /// Bind parameters to a network. Parameters are assumed validated.
    pub fn new(network: &'a PortNetwork, params: &'a CostParams) -> Self {
        Self { network, params }
    }

    /// Score `path`.
    ///
    /// Consecutive ports need not be adjacent: distances for non-adjacent
    /// pairs are computed from coordinates.
    ///
    /// # Errors
    ///
    /// [`PlanError::UnknownPort`] if any port in the path is not in the
    /// network.
    pub fn score(&self, path: &[PortCode]) -> Result<PathScore, PlanError> {
        let mut handling = 0.0;
        for code in path {
            if !self.network.contains(code) {
                return Err(PlanError::UnknownPort(code.clone()));
            }
            handling += self
                .params
                .overrides
                .cost_for(code, self.params.default_handling_cost);
        }

        let factor = capacity_factor(self.params.capacity_tons);
        let mut total_cost = handling;
        let mut fuel = 0.0;
        let mut distance = 0.0;
        let mut time = 0.0;
        for pair in path.windows(2) {
            let metrics = self
                .network
                .edge_metrics(&pair[0], &pair[1])
                .ok_or_else(|| PlanError::UnknownPort(pair[1].clone()))?;
            let edge_cost = metrics.distance_km * self.params.fuel_price_per_km * factor;
            total_cost += edge_cost;
            fuel += edge_cost;
            distance += metrics.distance_km;
            time += metrics.distance_km / self.params.speed_kmh;
        }

        Ok(PathScore {
            cost: round2(total_cost),
            time_h: round2(time),
            distance_km: round2(distance),
            handling_cost: round2(handling),
            fuel_cost: round2(fuel),
            hops: path.len().saturating_sub(1),
        })
    }
}
