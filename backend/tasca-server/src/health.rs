use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - status, version and store reachability
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (status, store) = match state.store.ping().await {
        Ok(()) => ("healthy", "operational"),
        Err(e) => {
            warn!("Health check: store ping failed: {}", e);
            ("degraded", "unreachable")
        }
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "store": store,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe, 503 until the store answers
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Store unavailable").into_response()
        }
    }
}
