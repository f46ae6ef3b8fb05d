//! Liveness probe.

use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// `GET /` — liveness check.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: config::APP_NAME,
        status: "running",
    })
}
