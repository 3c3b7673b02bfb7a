//! Health and status reporting for monitoring.
//!
//! Neither handler probes a dependency: the subsystem labels in the health
//! payload are fixed and the n8n URL is echoed from configuration.

use axum::extract::State;
use axum::Json;
use chrono::SecondsFormat;
use creative_core::process::MemoryUsage;
use serde::Serialize;

use crate::state::AppState;

/// Service version reported by both endpoints.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Labels reported per subsystem in the health payload.
#[derive(Debug, Serialize)]
pub struct ServiceStatuses {
    pub api: &'static str,
    pub database: &'static str,
    /// Configured n8n base URL.
    pub n8n: String,
}

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// RFC 3339 UTC instant with millisecond precision.
    pub timestamp: String,
    pub services: ServiceStatuses,
}

/// Operational status response payload.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Seconds since process start.
    pub uptime: f64,
    pub memory: MemoryUsage,
    pub environment: String,
}

/// GET /api/v2/system/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: API_VERSION,
        timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        services: ServiceStatuses {
            api: "running",
            database: "connected",
            n8n: state.config.n8n.url.clone(),
        },
    })
}

/// GET /api/v2/system/status
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let memory = tokio::task::spawn_blocking(MemoryUsage::snapshot)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Memory snapshot task failed");
            MemoryUsage::default()
        });

    Json(StatusResponse {
        status: "operational",
        version: API_VERSION,
        uptime: state.started_at.elapsed().as_secs_f64(),
        memory,
        environment: state.config.environment.clone(),
    })
}
