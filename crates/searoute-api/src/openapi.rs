//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Searoute API",
        version = "0.1.0",
        description = "Shipping route optimizer: cheapest deadline-feasible routes over a static port network.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::ports::list_ports,
        crate::routes::ports::get_port,
        crate::routes::network::list_edges,
        crate::routes::optimize::optimize_route,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::ports::PortView,
        crate::routes::ports::PortListResponse,
        crate::routes::network::EdgeView,
        crate::routes::network::EdgeListResponse,
        crate::routes::optimize::OptimizeRequest,
        crate::routes::optimize::OverridesInput,
        crate::routes::optimize::OptimizeResponse,
        crate::routes::optimize::BestRoute,
        crate::routes::optimize::CandidateView,
        crate::routes::optimize::Waypoint,
        crate::routes::optimize::SkippedOverride,
    )),
    tags(
        (name = "network", description = "Port and edge tables"),
        (name = "routes", description = "Route optimization"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
