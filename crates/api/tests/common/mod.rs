//! Common test utilities for integration tests.
//!
//! Tests run against the in-memory storage backend, so no database is needed.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use domain::models::DeviceSeed;
use osteo_sync_api::{app::create_app, config::Config};
use persistence::Storage;
use tower::ServiceExt;

/// Serial numbers registered in every test app.
pub const SERIALS: [&str; 2] = ["SER-001", "SER-002"];

pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("Failed to load test config")
}

pub fn test_seeds() -> Vec<DeviceSeed> {
    SERIALS
        .iter()
        .map(|serial| DeviceSeed {
            serial_number: serial.to_string(),
            name: format!("Test densitometer {serial}"),
        })
        .collect()
}

/// App over fresh in-memory storage with [`SERIALS`] registered.
pub fn create_test_app() -> Router {
    create_app(test_config(), Storage::in_memory(&test_seeds()))
}

pub fn create_test_app_with(config: Config, storage: Storage) -> Router {
    create_app(config, storage)
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// A valid sync payload for `serial` with the given T-score.
pub fn reading_payload(serial: &str, t_score: f64) -> serde_json::Value {
    serde_json::json!({
        "device_serial": serial,
        "patient_id": "patient-001",
        "doctor_id": "doctor-001",
        "bmd_result": 0.82,
        "t_score": t_score,
        "lat": -6.2,
        "long": 106.8
    })
}

/// Syncs a reading and returns the response status and body.
pub async fn sync_reading(
    app: &Router,
    payload: serde_json::Value,
) -> (axum::http::StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/sync/reading", payload))
        .await
        .unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}

pub async fn dashboard_stats(app: &Router) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/dashboard/stats"))
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    parse_response_body(response).await
}
