//! Handlers for the `/api/tasks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskmanager_core::types::DbId;
use taskmanager_db::models::task::TaskDto;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<TaskDto>,
) -> AppResult<(StatusCode, Json<TaskDto>)> {
    let task = state.tasks.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TaskDto>>> {
    let tasks = state.tasks.get_all_tasks().await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<TaskDto>> {
    let task = state.tasks.get_task_by_id(id).await?;
    Ok(Json(task))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<TaskDto>,
) -> AppResult<Json<TaskDto>> {
    let task = state.tasks.update_task(id, input).await?;
    Ok(Json(task))
}

/// PATCH /api/tasks/complete/{id}
pub async fn complete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<TaskDto>> {
    let task = state.tasks.mark_task_as_completed(id).await?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.tasks.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
