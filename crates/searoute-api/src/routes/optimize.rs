//! # Route Optimization API
//!
//! `POST /v1/routes/optimize` plans the cheapest route that meets a
//! deadline.
//!
//! ## Request Handling
//!
//! - Unknown or malformed origin/destination codes are `400 BAD_REQUEST`.
//! - Non-positive numeric fields and an out-of-range `max_hops` are
//!   `422 VALIDATION_ERROR`.
//! - Override entries are parsed leniently: a malformed entry is skipped and
//!   echoed back in `skipped_overrides`, and the rest still apply.
//! - "No feasible route" is a normal `200` with `best: null`.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use searoute_core::{
    parse_overrides, HandlingOverrides, OverrideParse, PortCode, RejectedOverride, ValidationError,
};
use searoute_network::PortNetwork;
use searoute_planner::{Candidate, RouteRequest};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::middleware::metrics::{record_plan, PlanOutcome};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Handling-cost overrides: a map (`{"HKG": 999}`) or the form string
/// `"HKG:600,SIN:700"`.
///
/// Map values are taken loosely so that one bad entry is skipped instead of
/// failing the whole body: numbers and numeric strings are costs, anything
/// else is reported in `skipped_overrides`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum OverridesInput {
    Map(BTreeMap<String, serde_json::Value>),
    Text(String),
}

impl OverridesInput {
    fn parse(&self) -> OverrideParse {
        match self {
            Self::Map(map) => {
                HandlingOverrides::from_checked_entries(map.iter().map(|(code, value)| (code, map_cost(value))))
            }
            Self::Text(raw) => parse_overrides(raw),
        }
    }
}

fn map_cost(value: &serde_json::Value) -> Result<f64, String> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().ok_or_else(|| format!("cost is not a number: {n}")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("cost is not a number: \"{raw}\"")),
        other => Err(format!("cost is not a number: {other}")),
    }
}

/// Route optimization request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OptimizeRequest {
    /// Origin port code.
    pub origin: String,
    /// Destination port code.
    pub destination: String,
    /// Vessel capacity in tons.
    pub capacity: f64,
    /// Vessel speed in km/h. Defaults to the network's reference speed.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Latest acceptable arrival in hours. Unlimited when omitted.
    #[serde(default)]
    pub deadline: Option<f64>,
    /// Fuel price per km.
    #[serde(default)]
    pub fuel_price: Option<f64>,
    /// Maximum edges per route.
    #[serde(default)]
    pub max_hops: Option<usize>,
    /// Per-port handling costs.
    #[serde(default)]
    pub overrides: Option<OverridesInput>,
}

impl Validate for OptimizeRequest {
    fn validate(&self) -> Result<(), AppError> {
        let numbers = [
            ("capacity", Some(self.capacity)),
            ("speed", self.speed),
            ("deadline", self.deadline),
            ("fuel_price", self.fuel_price),
        ];
        for (name, value) in numbers {
            if let Some(value) = value {
                if !(value.is_finite() && value > 0.0) {
                    return Err(ValidationError::parameter(name, value, "must be a positive number").into());
                }
            }
        }
        Ok(())
    }
}

impl OptimizeRequest {
    fn port(raw: &str) -> Result<PortCode, AppError> {
        PortCode::parse(raw).map_err(|_| AppError::BadRequest(format!("unknown port: {raw}")))
    }

    fn into_route_request(self) -> Result<(RouteRequest, Vec<RejectedOverride>), AppError> {
        let parse = self.overrides.as_ref().map(OverridesInput::parse).unwrap_or_default();

        let mut builder = RouteRequest::builder(Self::port(&self.origin)?, Self::port(&self.destination)?)
            .capacity(self.capacity)
            .overrides(parse.overrides);
        if let Some(speed) = self.speed {
            builder = builder.speed(speed);
        }
        if let Some(deadline) = self.deadline {
            builder = builder.deadline(deadline);
        }
        if let Some(fuel_price) = self.fuel_price {
            builder = builder.fuel_price(fuel_price);
        }
        if let Some(max_hops) = self.max_hops {
            builder = builder.max_hops(max_hops);
        }
        Ok((builder.build(), parse.rejected))
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// A scored route.
#[derive(Debug, Serialize, ToSchema)]
pub struct CandidateView {
    pub path: Vec<String>,
    pub cost: f64,
    pub time_h: f64,
    pub distance_km: f64,
    pub handling_cost: f64,
    pub fuel_cost: f64,
    pub hops: usize,
}

impl From<&Candidate> for CandidateView {
    fn from(c: &Candidate) -> Self {
        Self {
            path: c.path.iter().map(ToString::to_string).collect(),
            cost: c.score.cost,
            time_h: c.score.time_h,
            distance_km: c.score.distance_km,
            handling_cost: c.score.handling_cost,
            fuel_cost: c.score.fuel_cost,
            hops: c.score.hops,
        }
    }
}

/// A point on the best route, for map rendering.
#[derive(Debug, Serialize, ToSchema)]
pub struct Waypoint {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// The best route with coordinates for each port.
#[derive(Debug, Serialize, ToSchema)]
pub struct BestRoute {
    #[serde(flatten)]
    pub route: CandidateView,
    pub waypoints: Vec<Waypoint>,
}

impl BestRoute {
    fn new(network: &PortNetwork, candidate: &Candidate) -> Self {
        let waypoints = candidate
            .path
            .iter()
            .filter_map(|code| network.port(code))
            .map(|port| Waypoint {
                code: port.code.to_string(),
                name: port.name.clone(),
                lat: port.location.lat(),
                lon: port.location.lon(),
            })
            .collect();
        Self {
            route: candidate.into(),
            waypoints,
        }
    }
}

/// An override entry that was skipped.
#[derive(Debug, Serialize, ToSchema)]
pub struct SkippedOverride {
    pub token: String,
    pub reason: String,
}

/// Route optimization response.
#[derive(Debug, Serialize, ToSchema)]
pub struct OptimizeResponse {
    pub plan_id: Uuid,
    pub computed_at: DateTime<Utc>,
    /// Cheapest feasible route, or null when none meets the deadline.
    pub best: Option<BestRoute>,
    /// Every feasible route, cheapest first.
    pub all: Vec<CandidateView>,
    /// Number of routes that missed the deadline.
    pub discarded: usize,
    /// Number of routes enumerated.
    pub enumerated: usize,
    pub skipped_overrides: Vec<SkippedOverride>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Build the optimize router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/routes/optimize", post(optimize_route))
}

/// POST /v1/routes/optimize: Plan the cheapest feasible route.
#[utoipa::path(
    post,
    path = "/v1/routes/optimize",
    request_body = OptimizeRequest,
    responses(
        (status = 200, description = "Plan computed; best is null when no route is feasible", body = OptimizeResponse),
        (status = 400, description = "Malformed body or unknown port", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid numeric parameter", body = crate::error::ErrorBody),
    ),
    tag = "routes"
)]
pub(crate) async fn optimize_route(
    State(state): State<AppState>,
    body: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let result = plan(&state, body);
    if result.is_err() {
        record_plan(PlanOutcome::Rejected, None);
    }
    result.map(Json)
}

fn plan(
    state: &AppState,
    body: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<OptimizeResponse, AppError> {
    let (request, rejected) = extract_validated_json(body)?.into_route_request()?;
    for skipped in &rejected {
        tracing::warn!(token = %skipped.token, reason = %skipped.reason, "skipping handling override");
    }

    let plan = state.planner.plan(&request)?;
    let outcome = if plan.best.is_some() {
        PlanOutcome::Found
    } else {
        PlanOutcome::NoRoute
    };
    record_plan(outcome, Some(plan.enumerated));

    let network = state.planner.network();
    Ok(OptimizeResponse {
        plan_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        best: plan.best.as_ref().map(|c| BestRoute::new(network, c)),
        all: plan.feasible.iter().map(CandidateView::from).collect(),
        discarded: plan.over_deadline.len(),
        enumerated: plan.enumerated,
        skipped_overrides: rejected
            .into_iter()
            .map(|r| SkippedOverride {
                token: r.token,
                reason: r.reason,
            })
            .collect(),
    })
}
