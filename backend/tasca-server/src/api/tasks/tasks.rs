//! Task REST API handlers
//!
//! Handlers only talk to the injected [`TaskStore`](tasca_db::TaskStore).
//! Create-time validation runs before the store is touched; updates rely on
//! the store validators.

use crate::{
    ApiError, ApiResult, AppState, CreateTaskRequest, TaskMessageResponse, TaskStatsResponse,
    UpdateImageRequest, UpdateTaskRequest,
};

use tasca_core::{Task, TaskPatch, TaskStats};
use tasca_db::UpdateOptions;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /stats
pub async fn get_task_stats(State(state): State<AppState>) -> ApiResult<Json<TaskStatsResponse>> {
    let tasks = state
        .store
        .find_all()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to compute task statistics"))?;

    Ok(Json(TaskStats::from_tasks(&tasks).into()))
}

/// POST /
///
/// Validate and create a task. Responds 201 with the stored task.
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let Json(req) = payload?;
    let new_task = req.into_new_task()?;

    let task = state
        .store
        .create(new_task)
        .await
        .map_err(|e| ApiError::from_store(e, "Could not create task"))?;

    info!("Created task {}", task.id);
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /
///
/// All tasks, in insertion order
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state
        .store
        .find_all()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch tasks"))?;

    Ok(Json(tasks))
}

/// GET /{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Task>> {
    let task_id = Uuid::parse_str(&id)?;

    let task = state
        .store
        .find_by_id(task_id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch task"))?
        .ok_or_else(|| task_not_found(task_id))?;

    Ok(Json(task))
}

/// PUT /{id}
///
/// Apply a partial or full update; the store re-runs the field validators.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let task_id = Uuid::parse_str(&id)?;
    let Json(req) = payload?;

    let task = state
        .store
        .find_by_id_and_update(task_id, TaskPatch::from(req), UpdateOptions::default())
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to update task"))?
        .ok_or_else(|| task_not_found(task_id))?;

    info!("Updated task {}", task.id);
    Ok(Json(task))
}

/// DELETE /{id}
///
/// Responds with the deleted task's last state
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskMessageResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let task = state
        .store
        .find_by_id_and_delete(task_id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to delete task"))?
        .ok_or_else(|| task_not_found(task_id))?;

    info!("Deleted task {}", task.id);
    Ok(Json(TaskMessageResponse::deleted(task)))
}

/// PUT /{id}/image
pub async fn update_task_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateImageRequest>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let task_id = Uuid::parse_str(&id)?;
    // A bodiless request carries no image rather than malformed JSON
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => UpdateImageRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let image = req.into_image()?;

    let task = state
        .store
        .find_by_id_and_update(task_id, TaskPatch::image(image), UpdateOptions::default())
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to update task image"))?
        .ok_or_else(|| task_not_found(task_id))?;

    Ok(Json(task))
}

/// PUT /{id}/image/reset
///
/// Clear the image. Validators are skipped, so this works even on a task
/// whose other fields would no longer pass them.
pub async fn reset_task_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskMessageResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let task = state
        .store
        .find_by_id_and_update(
            task_id,
            TaskPatch::clear_image(),
            UpdateOptions::skip_validators(),
        )
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to reset task image"))?
        .ok_or_else(|| task_not_found(task_id))?;

    Ok(Json(TaskMessageResponse::image_reset(task)))
}

#[track_caller]
fn task_not_found(id: Uuid) -> ApiError {
    ApiError::not_found(format!("Task {} not found", id))
}
