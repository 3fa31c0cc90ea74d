use crate::state::{ServerMetadata, ServerState};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

/// Health check endpoint (liveness)
/// Returns 200 with catalog size once the server is accepting requests
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(ServerMetadata {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
        authors: state.catalog.len(),
        works: state.catalog.work_count(),
    })
}
