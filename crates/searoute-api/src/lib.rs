//! # searoute-api: Axum API for the Shipping Route Optimizer
//!
//! ## API Surface
//!
//! | Method | Path                   | Module                  |
//! |--------|------------------------|-------------------------|
//! | GET    | `/health/liveness`     | this module             |
//! | GET    | `/health/readiness`    | this module             |
//! | GET    | `/v1/ports`            | [`routes::ports`]       |
//! | GET    | `/v1/ports/{code}`     | [`routes::ports`]       |
//! | GET    | `/v1/network/edges`    | [`routes::network`]     |
//! | POST   | `/v1/routes/optimize`  | [`routes::optimize`]    |
//! | GET    | `/openapi.json`        | [`openapi`]             |
//! | GET    | `/metrics`             | [`middleware::metrics`] |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → metrics_middleware → Handler
//! ```

pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes are mounted outside the metrics and tracing layers so
/// orchestrator polling does not flood either.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::ports::router())
        .merge(routes::network::router())
        .merge(routes::optimize::router())
        .merge(openapi::router())
        .merge(middleware::metrics::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The network is loaded before the router exists, so a
/// serving process is always ready.
async fn readiness() -> &'static str {
    "ready"
}
