//! End-to-end flows through the HTTP router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use valuedeck::dashboard::build_router;
use valuedeck::dashboard::routes::DashboardState;

fn app() -> Router {
    build_router(Arc::new(DashboardState::default()))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), 1_000_000).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, json: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_miner_edit_then_reselect() {
    let app = app();

    let (status, view) = send(
        &app,
        post("/api/miner/edit", serde_json::json!({"field": "cost", "value": 3100.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["fields"]["upfront_usd"], 3100.0);
    assert_eq!(view["display"]["upfront_usd"], "3100");
    assert_eq!(view["selected"]["id"], "antminer-s21");

    let (_, view) = send(&app, post("/api/miner/select", serde_json::json!({"id": "antminer-s21"}))).await;
    assert_eq!(view["fields"]["upfront_usd"], 4000.0);
}

#[tokio::test]
async fn test_miner_blank_entry_renders_empty() {
    let app = app();
    let (status, view) = send(
        &app,
        post("/api/miner/edit", serde_json::json!({"field": "hashrate", "value": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(view["fields"]["hashrate_ths"].is_null());
    assert_eq!(view["display"]["hashrate_ths"], "");
}

#[tokio::test]
async fn test_state_persists_across_requests() {
    let app = app();
    send(&app, post("/api/miner/select", serde_json::json!({"id": "avalon-a1366"}))).await;
    let (_, view) = send(&app, get("/api/miner")).await;
    assert_eq!(view["selected"]["name"], "Canaan Avalon A1366");
    assert_eq!(view["display"]["preset_summary"], "130 TH/s • 25 J/TH • $2,400");
}

#[tokio::test]
async fn test_valuation_edit_then_preset() {
    let app = app();

    let (status, view) = send(
        &app,
        post("/api/valuation/input", serde_json::json!({"field": "current_pe", "value": 50.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["inputs"]["current_pe"], 50.0);
    assert_eq!(view["selected_preset"], "semiconductors");
    assert_eq!(view["display"]["required_growth"], "100.0%");

    let (_, view) = send(&app, post("/api/valuation/preset", serde_json::json!({"id": "healthcare"}))).await;
    assert_eq!(view["inputs"]["current_pe"], 20.0);
    assert_eq!(view["selected_preset"], "healthcare");
    assert_eq!(view["display"]["years_to_breakeven"], "1.1 years");
}

#[tokio::test]
async fn test_degenerate_input_yields_nulls_not_errors() {
    let app = app();
    let (status, view) = send(
        &app,
        post("/api/valuation/input", serde_json::json!({"field": "current_pe", "value": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(view["metrics"]["returns"][0]["multiple"].is_null());
    assert_eq!(view["display"]["returns"][0]["total_return"], "Infinityx");
}

#[tokio::test]
async fn test_unknown_ids_are_rejected() {
    let app = app();
    let (status, body) = send(&app, post("/api/valuation/preset", serde_json::json!({"id": "energy"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown valuation preset: energy");

    let (status, _) = send(
        &app,
        post("/api/valuation/input", serde_json::json!({"field": "dividend", "value": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // State untouched by the rejected requests.
    let (_, view) = send(&app, get("/api/valuation")).await;
    assert_eq!(view["selected_preset"], "semiconductors");
    assert_eq!(view["inputs"]["current_pe"], 38.0);
}

#[tokio::test]
async fn test_presets_listing() {
    let (status, presets) = send(&app(), get("/api/valuation/presets")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = presets
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Semiconductors", "Health Care", "Consumer Staples", "Custom"]);
}

#[tokio::test]
async fn test_stateless_compute_matches_preset() {
    let app = app();
    let (_, computed) = send(&app, get("/api/valuation/compute?current_pe=38&fair_pe=25&cagr=20")).await;
    let (_, view) = send(&app, get("/api/valuation")).await;
    assert_eq!(computed, view["metrics"]);
}
