//! Health probes
//!
//! - /health and /health/live answer as long as the process is up
//! - /health/ready also checks the database, 503 if it is unreachable

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Probe response
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
}

impl HealthReport {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: None,
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<HealthReport> {
    Json(HealthReport::new("healthy"))
}

/// GET /health/live
pub async fn liveness_check() -> Json<HealthReport> {
    Json(HealthReport::new("alive"))
}

/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    match db::health_check(state.db()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthReport {
                database: Some("healthy"),
                ..HealthReport::new("ready")
            }),
        ),
        // The failure itself is logged by db::health_check
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthReport {
                database: Some("unhealthy"),
                ..HealthReport::new("not_ready")
            }),
        ),
    }
}
