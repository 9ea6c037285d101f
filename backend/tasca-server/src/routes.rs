use crate::{
    AppState, create_task, delete_task, get_task, get_task_stats, health, list_tasks,
    request_logging, reset_task_image, update_task, update_task_image,
};

use axum::{
    Router, middleware,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Task routes, relative to the mount path.
///
/// `/stats` is static so it always wins over `/{id}`.
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_task_stats))
        .route("/", get(list_tasks).post(create_task))
        .route("/{id}", get(get_task).put(update_task).delete(delete_task))
        .route("/{id}/image", put(update_task_image))
        .route("/{id}/image/reset", put(reset_task_image))
}

/// Build the application router.
///
/// `mount_path` must start with `/` and not end with one (checked by
/// `ApiConfig::validate`).
pub fn build_router(state: AppState, mount_path: &str) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .nest(mount_path, task_routes())
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
