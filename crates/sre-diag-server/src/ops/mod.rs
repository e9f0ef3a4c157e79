//! Diagnostics HTTP endpoints.
//!
//! - `/health`  : liveness, static sub-checks
//! - `/info`    : identity, runtime, environment and memory
//! - `/metrics` : Prometheus text format
//!
//! Handlers read the stats provider synchronously and always answer 200.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use sre_diag_core::report::{environment_name, HealthReport, InfoReport};

use crate::app_state::AppState;

/// Env var read by `/info`.
pub const ENVIRONMENT_ENV: &str = "ENVIRONMENT";

/// Content type of the Prometheus text format.
pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let report = HealthReport::new(state.stats().uptime(), Utc::now());
    tracing::debug!(uptime = %report.uptime, "health");
    Json(report)
}

pub async fn info(State(state): State<AppState>) -> Json<InfoReport> {
    let stats = state.stats();
    let environment = environment_name(std::env::var(ENVIRONMENT_ENV).ok().as_deref());
    let report = InfoReport::new(
        Utc::now(),
        stats.runtime_version(),
        stats.server_info(),
        environment,
        stats.snapshot().memory(),
    );
    tracing::debug!(environment = %report.environment, "info");
    Json(report)
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.stats().snapshot().to_exposition();
    tracing::debug!(bytes = body.len(), "metrics");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)],
        body,
    )
        .into_response()
}
