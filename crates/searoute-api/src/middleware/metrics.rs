//! # Prometheus Metrics
//!
//! Request and planning metrics recorded through the `metrics` facade and
//! exported by `metrics-exporter-prometheus` at `/metrics`.
//!
//! | Metric | Type | Labels |
//! |--------|------|--------|
//! | `searoute_http_requests_total` | counter | `method`, `status` |
//! | `searoute_http_request_duration_seconds` | histogram | `method` |
//! | `searoute_route_plans_total` | counter | `outcome` |
//! | `searoute_route_candidates` | histogram | none |
//!
//! Without an installed recorder the macros are no-ops, so handlers and
//! tests never need to care whether metrics are enabled.

use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::error::AppError;
use crate::state::AppState;

/// Request counter.
pub const HTTP_REQUESTS_TOTAL: &str = "searoute_http_requests_total";
/// Request latency histogram.
pub const HTTP_REQUEST_DURATION: &str = "searoute_http_request_duration_seconds";
/// Plan outcome counter.
pub const ROUTE_PLANS_TOTAL: &str = "searoute_route_plans_total";
/// Enumerated candidates per plan.
pub const ROUTE_CANDIDATES: &str = "searoute_route_candidates";

/// Install the global Prometheus recorder.
///
/// Call at most once per process.
pub fn install_recorder() -> Result<PrometheusHandle, crate::bootstrap::BootstrapError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| crate::bootstrap::BootstrapError::Metrics(e.to_string()))
}

/// Outcome label for [`ROUTE_PLANS_TOTAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    /// A feasible route was found.
    Found,
    /// The request was valid but nothing met the deadline.
    NoRoute,
    /// The request was rejected before planning.
    Rejected,
}

impl PlanOutcome {
    fn label(self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::NoRoute => "no_route",
            Self::Rejected => "rejected",
        }
    }
}

/// Record one planning request.
pub fn record_plan(outcome: PlanOutcome, enumerated: Option<usize>) {
    metrics::counter!(ROUTE_PLANS_TOTAL, "outcome" => outcome.label()).increment(1);
    if let Some(count) = enumerated {
        metrics::histogram!(ROUTE_CANDIDATES).record(count as f64);
    }
}

/// Middleware that counts requests by method and status and records latency.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().as_str().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    metrics::counter!(HTTP_REQUESTS_TOTAL, "method" => method.clone(), "status" => status)
        .increment(1);
    metrics::histogram!(HTTP_REQUEST_DURATION, "method" => method)
        .record(started.elapsed().as_secs_f64());

    response
}

/// Build the metrics router.
pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(render))
}

/// GET /metrics: Prometheus text exposition.
async fn render(State(state): State<AppState>) -> Result<String, AppError> {
    state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .ok_or_else(|| AppError::NotFound("metrics exporter is disabled".to_string()))
}
