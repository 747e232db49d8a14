//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// State is built before the listener binds, so a served request is ready.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with collection sizes.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let comments = state.thread.read().await.comment_count();
    let mood_entries = state.tracker.read().await.entries().len();
    let journal_entries = state.journal.read().await.entries().len();
    let resources = state.resources.read().await.resources().len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        topics: state.topics.len(),
        comments,
        mood_entries,
        journal_entries,
        resources,
    })
}
