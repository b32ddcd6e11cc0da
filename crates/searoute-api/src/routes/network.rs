//! # Edge Table API

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// One precomputed edge. `a` and `b` are in code order; the edge may be
/// declared in one or both directions.
#[derive(Debug, Serialize, ToSchema)]
pub struct EdgeView {
    pub a: String,
    pub b: String,
    pub distance_km: f64,
    /// Travel time at the network's reference speed.
    pub nominal_time_h: f64,
}

/// Edge table response.
#[derive(Debug, Serialize, ToSchema)]
pub struct EdgeListResponse {
    pub count: usize,
    pub reference_speed_kmh: f64,
    pub edges: Vec<EdgeView>,
}

/// Build the network router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/network/edges", get(list_edges))
}

/// GET /v1/network/edges: Precomputed edge metrics.
#[utoipa::path(
    get,
    path = "/v1/network/edges",
    responses(
        (status = 200, description = "Edge table", body = EdgeListResponse),
    ),
    tag = "network"
)]
pub(crate) async fn list_edges(State(state): State<AppState>) -> Json<EdgeListResponse> {
    let network = state.planner.network();
    let edges: Vec<EdgeView> = network
        .edges()
        .iter()
        .map(|(pair, metrics)| EdgeView {
            a: pair.low().to_string(),
            b: pair.high().to_string(),
            distance_km: metrics.distance_km,
            nominal_time_h: metrics.nominal_time_h,
        })
        .collect();
    Json(EdgeListResponse {
        count: edges.len(),
        reference_speed_kmh: network.defaults().reference_speed_kmh,
        edges,
    })
}
