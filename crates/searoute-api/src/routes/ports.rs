//! # Port Table API
//!
//! Read-only views of the loaded network's ports, used by front ends to
//! populate origin/destination pickers and draw the map.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use searoute_core::{Port, PortCode};
use searoute_network::PortNetwork;

use crate::error::AppError;
use crate::state::AppState;

/// A port with its outgoing links.
#[derive(Debug, Serialize, ToSchema)]
pub struct PortView {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Directly reachable ports, in declared order.
    pub neighbors: Vec<String>,
}

impl PortView {
    pub(crate) fn new(network: &PortNetwork, port: &Port) -> Self {
        Self {
            code: port.code.to_string(),
            name: port.name.clone(),
            lat: port.location.lat(),
            lon: port.location.lon(),
            neighbors: network
                .neighbors(&port.code)
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Port table response.
#[derive(Debug, Serialize, ToSchema)]
pub struct PortListResponse {
    pub count: usize,
    pub ports: Vec<PortView>,
}

/// Build the ports router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/ports", get(list_ports))
        .route("/v1/ports/{code}", get(get_port))
}

/// GET /v1/ports: List all ports in code order.
#[utoipa::path(
    get,
    path = "/v1/ports",
    responses(
        (status = 200, description = "Port table", body = PortListResponse),
    ),
    tag = "network"
)]
pub(crate) async fn list_ports(State(state): State<AppState>) -> Json<PortListResponse> {
    let network = state.planner.network();
    let ports: Vec<PortView> = network.ports().map(|p| PortView::new(network, p)).collect();
    Json(PortListResponse {
        count: ports.len(),
        ports,
    })
}

/// GET /v1/ports/{code}: One port and its neighbours.
#[utoipa::path(
    get,
    path = "/v1/ports/{code}",
    params(("code" = String, Path, description = "Port code, case-insensitive")),
    responses(
        (status = 200, description = "Port found", body = PortView),
        (status = 404, description = "Unknown port", body = crate::error::ErrorBody),
    ),
    tag = "network"
)]
pub(crate) async fn get_port(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<PortView>, AppError> {
    let network = state.planner.network();
    PortCode::parse(&code)
        .ok()
        .and_then(|c| network.port(&c))
        .map(|port| Json(PortView::new(network, port)))
        .ok_or_else(|| AppError::NotFound(format!("port {code}")))
}
