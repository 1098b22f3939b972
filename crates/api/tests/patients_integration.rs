//! Integration tests for patient and medical record endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{create_test_app, delete_request, get_request, json_request, parse_response_body};
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::json;
use tower::ServiceExt;

fn patient_payload(name: &str) -> serde_json::Value {
    json!({
        "nik": "3201010101900001",
        "name": name,
        "gender": "F",
        "birth_date": "1956-08-17",
        "address": "Jl. Sudirman 10, Bogor"
    })
}

async fn create_patient(app: &axum::Router, name: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/patients",
            patient_payload(name),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_patient_crud() {
    let app = create_test_app();
    let name: String = Name().fake();

    let id = create_patient(&app, &name).await;

    let response = app.clone().oneshot(get_request("/api/v1/patients")).await.unwrap();
    let list = parse_response_body(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], name.as_str());
    assert_eq!(list[0]["birth_date"], "1956-08-17");

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/patients/{id}"),
            patient_payload("Renamed Patient"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["name"], "Renamed Patient");

    let response = app
        .clone()
        .oneshot(delete_request(&format!("/api/v1/patients/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(delete_request(&format!("/api/v1/patients/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_patient_is_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/patients/does-not-exist",
            patient_payload("Nobody"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_birth_date_is_rejected() {
    let app = create_test_app();

    let mut payload = patient_payload("Siti");
    payload["birth_date"] = json!("17-08-1956");
    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/patients", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_medical_record_diagnosis_is_computed() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/patients/p-77/records",
            json!({
                "t_score": -2.8,
                "diagnosis": "Normal",
                "scan_date": "2024-06-01T09:00:00Z",
                "notes": "Lumbar spine"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let record = parse_response_body(response).await;
    assert_eq!(record["id"], 1);
    assert_eq!(record["patient_id"], "p-77");
    assert_eq!(record["diagnosis"], "Osteoporosis");
    assert_eq!(record["scan_date"], "2024-06-01T09:00:00Z");
}

#[tokio::test]
async fn test_patient_history_ordered_and_empty() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/patients/p-1/records"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await, json!([]));

    for date in ["2023-01-15T08:00:00Z", "2024-01-15T08:00:00Z"] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/patients/p-1/records",
                json!({ "t_score": -1.4, "scan_date": date }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(get_request("/api/v1/patients/p-1/records"))
        .await
        .unwrap();
    let history = parse_response_body(response).await;
    assert_eq!(history.as_array().unwrap().len(), 2);
    assert_eq!(history[0]["scan_date"], "2024-01-15T08:00:00Z");
    assert_eq!(history[0]["diagnosis"], "Osteopenia");
}

#[tokio::test]
async fn test_out_of_range_record_t_score_is_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/patients/p-1/records",
            json!({ "t_score": 42.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
