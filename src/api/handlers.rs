//! Request handlers for the `/tasks` routes.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::error::ApiErrorResponse;
use super::AppState;
use crate::task::{Task, TaskId, TaskInput};
use crate::TaskListError;

/// Body sent back when a background job is accepted.
pub const PROCESS_ACCEPTED: &str = "Task processing started in the background.\n";

/// Name given to jobs launched from `/tasks/process`.
const PROCESS_JOB_NAME: &str = "process tasks";

fn parse_id(raw: &str) -> Result<TaskId, TaskListError> {
    raw.parse()
        .map_err(|_| TaskListError::InvalidInput("Invalid task ID".to_string()))
}

fn parse_input(body: &[u8]) -> Result<TaskInput, TaskListError> {
    serde_json::from_slice(body)
        .map_err(|_| TaskListError::InvalidInput("Invalid input".to_string()))
}

/// `GET /tasks`
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.repository.list().await)
}

/// `GET /tasks/{id}`
pub async fn get_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>, ApiErrorResponse> {
    let id = parse_id(&raw_id)?;
    let task = state.repository.get(id).await?;
    Ok(Json(task))
}

/// `POST /tasks`
pub async fn create_task(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), ApiErrorResponse> {
    let input = parse_input(&body)?;
    let task = state.repository.create(input.title).await;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{id}`
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Task>, ApiErrorResponse> {
    let id = parse_id(&raw_id)?;
    let input = parse_input(&body)?;
    let task = state.repository.update(id, input.title).await?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}`
pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    let id = parse_id(&raw_id)?;
    state.repository.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /tasks/process`
pub async fn process_tasks(State(state): State<AppState>) -> (StatusCode, &'static str) {
    state.jobs.start(PROCESS_JOB_NAME);
    (StatusCode::ACCEPTED, PROCESS_ACCEPTED)
}
