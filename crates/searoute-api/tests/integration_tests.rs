//! # Integration Tests for searoute-api
//!
//! Drives the full router over the built-in demonstration network: health
//! probes, port and edge tables, route optimization (success, no route,
//! validation and bad-request paths), override handling, and the OpenAPI
//! document.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use searoute_api::state::AppState;
use searoute_network::demo_network;
use searoute_planner::RoutePlanner;

/// Helper: build the test app over the demonstration network, no metrics.
fn test_app() -> axum::Router {
    let state = AppState::new(RoutePlanner::new(demo_network().unwrap()));
    searoute_api::app(state)
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper: read response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

async fn get(uri: &str) -> axum::http::Response<Body> {
    test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn optimize(body: Value) -> axum::http::Response<Body> {
    optimize_raw(body.to_string()).await
}

async fn optimize_raw(body: String) -> axum::http::Response<Body> {
    test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/routes/optimize")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn path_of(candidate: &Value) -> String {
    candidate["path"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect::<Vec<_>>()
        .join("-")
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = get("/health/liveness").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = get("/health/readiness").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- Ports & Edges ------------------------------------------------------------

#[tokio::test]
async fn test_list_ports() {
    let response = get("/v1/ports").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], 8);
    let codes: Vec<&str> = body["ports"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["CNS", "DXB", "HKG", "IDX", "LAX", "PTY", "SHA", "SIN"]);
}

#[tokio::test]
async fn test_get_port_is_case_insensitive() {
    let response = get("/v1/ports/sin").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["code"], "SIN");
    assert_eq!(body["name"], "Singapore");
    assert_eq!(body["neighbors"], json!(["HKG", "SHA", "PTY"]));
}

#[tokio::test]
async fn test_get_unknown_port_is_404() {
    let response = get("/v1/ports/XYZ").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_edges() {
    let response = get("/v1/network/edges").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], 12);
    assert_eq!(body["reference_speed_kmh"], 20.0);
    let pty_sin = body["edges"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["a"] == "PTY" && e["b"] == "SIN")
        .unwrap();
    assert!((pty_sin["distance_km"].as_f64().unwrap() - 18807.851).abs() < 0.01);
}

// -- Route Optimization -------------------------------------------------------

#[tokio::test]
async fn test_optimize_sin_to_lax() {
    let response = optimize(json!({
        "origin": "SIN",
        "destination": "LAX",
        "capacity": 1000,
        "speed": 20,
        "deadline": 1200,
        "fuel_price": 0.12
    }))
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let best = &body["best"];
    assert_eq!(path_of(best), "SIN-PTY-LAX");
    assert_eq!(best["cost"], 4335.35);
    assert_eq!(best["time_h"], 1181.4);
    assert_eq!(best["hops"], 2);
    assert_eq!(best["waypoints"].as_array().unwrap().len(), 3);
    assert_eq!(best["waypoints"][1]["code"], "PTY");

    let all: Vec<String> = body["all"].as_array().unwrap().iter().map(path_of).collect();
    assert_eq!(all, ["SIN-PTY-LAX", "SIN-HKG-DXB-LAX", "SIN-SHA-DXB-LAX"]);
    assert_eq!(body["discarded"], 4);
    assert_eq!(body["enumerated"], 7);
    assert!(body["plan_id"].is_string());
    assert!(body["computed_at"].is_string());
    assert_eq!(body["skipped_overrides"], json!([]));
}

#[tokio::test]
async fn test_optimize_no_feasible_route_is_200_with_null_best() {
    let response = optimize(json!({
        "origin": "LAX",
        "destination": "IDX",
        "capacity": 1000,
        "deadline": 1
    }))
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["best"].is_null());
    assert_eq!(body["all"], json!([]));
    assert!(body["discarded"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_optimize_same_origin_and_destination() {
    let response = optimize(json!({
        "origin": "HKG",
        "destination": "HKG",
        "capacity": 1000
    }))
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["best"].is_null());
    assert_eq!(body["enumerated"], 0);
}

// -- Overrides ----------------------------------------------------------------

#[tokio::test]
async fn test_optimize_override_map_and_string_agree() {
    let base = json!({ "origin": "SIN", "destination": "LAX", "capacity": 1000 });
    let mut with_map = base.clone();
    with_map["overrides"] = json!({ "PTY": 2000 });
    let mut with_text = base.clone();
    with_text["overrides"] = json!("PTY:2000");

    let a = body_json(optimize(with_map).await).await;
    let b = body_json(optimize(with_text).await).await;
    assert_eq!(path_of(&a["best"]), "SIN-HKG-DXB-LAX");
    assert_eq!(a["best"]["cost"], b["best"]["cost"]);
    assert_eq!(a["all"], b["all"]);
}

#[tokio::test]
async fn test_optimize_skips_malformed_override_tokens() {
    let response = optimize(json!({
        "origin": "SIN",
        "destination": "LAX",
        "capacity": 1000,
        "overrides": "HKG:abc,PTY:2000,garbage"
    }))
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(path_of(&body["best"]), "SIN-HKG-DXB-LAX");
    let skipped: Vec<&str> = body["skipped_overrides"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["token"].as_str().unwrap())
        .collect();
    assert_eq!(skipped, ["HKG:abc", "garbage"]);
}

#[tokio::test]
async fn test_optimize_skips_malformed_override_map_entries() {
    let response = optimize(json!({
        "origin": "SIN",
        "destination": "LAX",
        "capacity": 1000,
        "overrides": { "HKG": "abc", "PTY": 2000 }
    }))
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(path_of(&body["best"]), "SIN-HKG-DXB-LAX");
    let skipped = body["skipped_overrides"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["token"], "HKG");
    assert!(skipped[0]["reason"].as_str().unwrap().contains("abc"));
}

// -- Error Paths --------------------------------------------------------------

#[tokio::test]
async fn test_optimize_unknown_port_is_400() {
    let response = optimize(json!({
        "origin": "XYZ",
        "destination": "LAX",
        "capacity": 1000
    }))
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].as_str().unwrap().contains("XYZ"));
}

#[tokio::test]
async fn test_optimize_malformed_json_is_400() {
    let response = optimize_raw("{ not json".to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_optimize_missing_capacity_is_400() {
    let response = optimize(json!({ "origin": "SIN", "destination": "LAX" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_optimize_non_positive_speed_is_422() {
    let response = optimize(json!({
        "origin": "SIN",
        "destination": "LAX",
        "capacity": 1000,
        "speed": 0
    }))
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"]["field"], "speed");
}

#[tokio::test]
async fn test_optimize_max_hops_out_of_range_is_422() {
    for max_hops in [0, 9] {
        let response = optimize(json!({
            "origin": "SIN",
            "destination": "LAX",
            "capacity": 1000,
            "max_hops": max_hops
        }))
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "max_hops={max_hops}");
    }
}

// -- OpenAPI & Metrics --------------------------------------------------------

#[tokio::test]
async fn test_openapi_document() {
    let response = get("/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/v1/routes/optimize"]["post"].is_object());
    assert!(body["components"]["schemas"]["OptimizeResponse"].is_object());
}

#[tokio::test]
async fn test_metrics_endpoint_without_recorder_is_404() {
    let response = get("/metrics").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
