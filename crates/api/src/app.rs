use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use chrono::Duration as ChronoDuration;
use domain::services::{DashboardAggregator, MedicalRecordService, ReadingIngestionService};
use persistence::Storage;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{dashboard, devices, health, medical_records, patients, readings};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: Storage,
    pub ingestion: ReadingIngestionService,
    pub dashboard: DashboardAggregator,
    pub records: MedicalRecordService,
}

impl AppState {
    /// Wires the services over the selected storage backend.
    pub fn new(config: Config, storage: Storage) -> Self {
        let dashboard =
            DashboardAggregator::new(storage.readings.clone(), storage.devices.clone())
                .with_active_window(ChronoDuration::seconds(config.dashboard.active_window_secs))
                .with_recent_limit(config.dashboard.recent_scans_limit);

        Self {
            ingestion: ReadingIngestionService::new(
                storage.readings.clone(),
                storage.devices.clone(),
            ),
            records: MedicalRecordService::new(storage.readings.clone()),
            dashboard,
            config: Arc::new(config),
            storage,
        }
    }
}

pub fn create_app(config: Config, storage: Storage) -> Router {
    let state = AppState::new(config, storage);
    let config = state.config.clone();

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api_routes = Router::new()
        .route("/api/v1/sync/reading", post(readings::sync_reading))
        .route("/api/v1/dashboard/stats", get(dashboard::get_stats))
        .route("/api/v1/devices", get(devices::list_devices))
        .route(
            "/api/v1/patients",
            get(patients::list_patients).post(patients::create_patient),
        )
        .route(
            "/api/v1/patients/:id",
            put(patients::update_patient).delete(patients::delete_patient),
        )
        .route(
            "/api/v1/patients/:id/records",
            get(medical_records::list_patient_records)
                .post(medical_records::create_medical_record),
        );

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
