//! # Feasible-Candidate Selection
//!
//! [`RoutePlanner`] ties enumeration and scoring together. A request is
//! resolved against the network's defaults, every enumerated path is
//! scored, and the candidates are split by the deadline. Feasible
//! candidates are sorted by ascending cost; ties go to the path with fewer
//! hops, then to the lexicographically smaller path, so results never
//! depend on enumeration order.
//!
//! The deadline is compared against the rounded travel time reported to the
//! caller, so a candidate shown as `time_h == deadline` is always feasible.

use std::cmp::Ordering;

use serde::Serialize;

use searoute_core::{HandlingOverrides, PlanError, PortCode, ValidationError, DEFAULT_CAPACITY_TONS};
use searoute_network::PortNetwork;

use crate::enumerate::{enumerate_paths, SimplePaths};
use crate::score::{positive, CostModel, CostParams, PathScore};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A route planning request. Optional fields fall back to the network's
/// [`PlannerDefaults`](searoute_core::PlannerDefaults).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// Start port.
    pub origin: PortCode,
    /// End port.
    pub destination: PortCode,
    /// Vessel capacity in tons.
    pub capacity_tons: f64,
    /// Vessel speed in km/h.
    pub speed_kmh: Option<f64>,
    /// Latest acceptable arrival, in hours. `None` means unlimited.
    pub deadline_h: Option<f64>,
    /// Fuel price per km.
    pub fuel_price_per_km: Option<f64>,
    /// Maximum edges per path.
    pub max_hops: Option<usize>,
    /// Per-port handling costs.
    pub overrides: HandlingOverrides,
}

impl RouteRequest {
    /// Start a request with the default capacity and no other parameters.
    pub fn builder(origin: PortCode, destination: PortCode) -> RouteRequestBuilder {
        RouteRequestBuilder {
            request: RouteRequest {
                origin,
                destination,
                capacity_tons: DEFAULT_CAPACITY_TONS,
                speed_kmh: None,
                deadline_h: None,
                fuel_price_per_km: None,
                max_hops: None,
                overrides: HandlingOverrides::new(),
            },
        }
    }
}

/// Builder for [`RouteRequest`].
#[derive(Debug, Clone)]
pub struct RouteRequestBuilder {
    request: RouteRequest,
}

impl RouteRequestBuilder {
    /// Vessel capacity in tons.
    pub fn capacity(mut self, tons: f64) -> Self {
        self.request.capacity_tons = tons;
        self
    }

    /// Vessel speed in km/h.
    pub fn speed(mut self, kmh: f64) -> Self {
        self.request.speed_kmh = Some(kmh);
        self
    }

    /// Arrival deadline in hours.
    pub fn deadline(mut self, hours: f64) -> Self {
        self.request.deadline_h = Some(hours);
        self
    }

    /// Fuel price per km.
    pub fn fuel_price(mut self, per_km: f64) -> Self {
        self.request.fuel_price_per_km = Some(per_km);
        self
    }

    /// Hop limit.
    pub fn max_hops(mut self, hops: usize) -> Self {
        self.request.max_hops = Some(hops);
        self
    }

    /// Handling-cost overrides.
    pub fn overrides(mut self, overrides: HandlingOverrides) -> Self {
        self.request.overrides = overrides;
        self
    }

    /// Finish the request. Values are validated when it is planned.
    pub fn build(self) -> RouteRequest {
        self.request
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A scored path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Ports from origin to destination.
    pub path: Vec<PortCode>,
    /// Cost, time, and breakdown.
    #[serde(flatten)]
    pub score: PathScore,
}

impl Candidate {
    fn rank(&self, other: &Self) -> Ordering {
        self.score
            .cost
            .total_cmp(&other.score.cost)
            .then(self.score.hops.cmp(&other.score.hops))
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Outcome of [`RoutePlanner::plan`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Cheapest feasible candidate, if any.
    pub best: Option<Candidate>,
    /// Candidates meeting the deadline, cheapest first.
    pub feasible: Vec<Candidate>,
    /// Candidates that miss the deadline, in the same order.
    pub over_deadline: Vec<Candidate>,
    /// Number of paths enumerated.
    pub enumerated: usize,
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// A request resolved against network defaults and validated.
#[derive(Debug, Clone)]
struct Resolved {
    params: CostParams,
    deadline_h: Option<f64>,
    max_hops: usize,
}

/// Plans routes over a fixed network.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    network: PortNetwork,
}

impl RoutePlanner {
    /// Create a planner over `network`.
    pub fn new(network: PortNetwork) -> Self {
        Self { network }
    }

    /// The network this planner searches.
    pub fn network(&self) -> &PortNetwork {
        &self.network
    }

    fn resolve(&self, request: &RouteRequest) -> Result<Resolved, PlanError> {
        for code in [&request.origin, &request.destination] {
            if !self.network.contains(code) {
                return Err(PlanError::UnknownPort(code.clone()));
            }
        }

        let defaults = self.network.defaults();
        let params = CostParams {
            capacity_tons: request.capacity_tons,
            speed_kmh: request.speed_kmh.unwrap_or(defaults.reference_speed_kmh),
            fuel_price_per_km: request.fuel_price_per_km.unwrap_or(defaults.fuel_price_per_km),
            default_handling_cost: defaults.handling_cost,
            overrides: request.overrides.clone(),
        };
        params.validate()?;

        if let Some(deadline) = request.deadline_h {
            positive("deadline", deadline)?;
        }

        // A simple path never has more edges than there are ports, so the
        // network default is clamped; only an explicit limit is range-checked.
        let limit = self.network.port_count();
        let max_hops = request.max_hops.unwrap_or(defaults.max_hops.min(limit));
        if !(1..=limit).contains(&max_hops) {
            return Err(ValidationError::InvalidParameter {
                name: "max_hops",
                value: max_hops.to_string(),
                reason: "must be between 1 and the number of ports",
            }
            .into());
        }

        Ok(Resolved {
            params,
            deadline_h: request.deadline_h,
            max_hops,
        })
    }

    /// Stream scored candidates without filtering or sorting.
    ///
    /// # Errors
    ///
    /// Fails up front for an unknown origin or destination or an invalid
    /// parameter; nothing is enumerated in that case.
    pub fn candidates(&self, request: &RouteRequest) -> Result<Candidates<'_>, PlanError> {
        let resolved = self.resolve(request)?;
        Ok(self.stream(request, resolved.params, resolved.max_hops))
    }

    fn stream(&self, request: &RouteRequest, params: CostParams, max_hops: usize) -> Candidates<'_> {
        Candidates {
            network: &self.network,
            paths: enumerate_paths(&self.network, &request.origin, &request.destination, max_hops),
            params,
        }
    }

    /// Plan a route.
    ///
    /// An empty `feasible` list (and `best == None`) is a normal outcome,
    /// not an error.
    ///
    /// # Errors
    ///
    /// [`PlanError::UnknownPort`] for an origin or destination not in the
    /// network, [`PlanError::Validation`] for an invalid parameter.
    pub fn plan(&self, request: &RouteRequest) -> Result<RoutePlan, PlanError> {
        let Resolved {
            params,
            deadline_h,
            max_hops,
        } = self.resolve(request)?;

        let mut feasible = Vec::new();
        let mut over_deadline = Vec::new();
        for candidate in self.stream(request, params, max_hops) {
            let candidate = candidate?;
            match deadline_h {
                Some(deadline) if candidate.score.time_h > deadline => over_deadline.push(candidate),
                _ => feasible.push(candidate),
            }
        }
        feasible.sort_by(Candidate::rank);
        over_deadline.sort_by(Candidate::rank);

        let enumerated = feasible.len() + over_deadline.len();
        let best = feasible.first().cloned();
        tracing::debug!(
            origin = %request.origin,
            destination = %request.destination,
            max_hops,
            enumerated,
            feasible = feasible.len(),
            over_deadline = over_deadline.len(),
            "route candidates evaluated"
        );
        match &best {
            Some(best) => tracing::info!(
                origin = %request.origin,
                destination = %request.destination,
                cost = best.score.cost,
                time_h = best.score.time_h,
                hops = best.score.hops,
                "best route selected"
            ),
            None => tracing::info!(
                origin = %request.origin,
                destination = %request.destination,
                enumerated,
                "no feasible route"
            ),
        }

        Ok(RoutePlan {
            best,
            feasible,
            over_deadline,
            enumerated,
        })
    }
}

/// Lazy stream of scored candidates. Created by
/// [`RoutePlanner::candidates`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    network: &'a PortNetwork,
    paths: SimplePaths<'a>,
    params: CostParams,
}

impl Iterator for Candidates<'_> {
    type Item = Result<Candidate, PlanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        let model = CostModel::new(self.network, &self.params);
        Some(model.score(&path).map(|score| Candidate { path, score }))
    }
}
