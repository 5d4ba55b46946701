//! Task endpoint handlers.
//!
//! Each handler decodes its request, calls one service operation, and encodes
//! the result. Failures become [`ApiError`] responses.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use mockable::Clock;

use super::{
    dto::{CreateTaskPayload, DbCheckResponse, HealthResponse, MoveTaskPayload, TaskResponse},
    error::ApiError,
    state::AppState,
};
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{CreateTaskRequest, MoveTaskRequest},
};

/// `GET /tasks`
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the store read fails.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.service.list().await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `POST /tasks`
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] for a malformed body or missing/blank
/// content.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CreateTaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let request = body
        .content
        .map_or_else(CreateTaskRequest::without_content, CreateTaskRequest::new);
    let task = state.service.create(request).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// `DELETE /tasks/{id}`
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] when no task has the identifier.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.service.remove(&TaskId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /tasks/{id}/move`
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] for a malformed body or a missing or
/// invalid column, and [`ApiError::NotFound`] for an unknown task.
pub async fn move_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    payload: Result<Json<MoveTaskPayload>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let column = body
        .column
        .ok_or_else(|| ApiError::BadRequest("Column is required".to_owned()))?;
    let task = state
        .service
        .move_task(MoveTaskRequest::new(TaskId::new(id), column))
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        timestamp: Utc::now(),
    })
}

/// `GET /db-check`
///
/// Lists tasks to check the store. A failing store is reported in the body
/// with `databaseConnected: false`; the status is always 200.
pub async fn db_check<R, C>(State(state): State<AppState<R, C>>) -> Json<DbCheckResponse>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let (task_count, database_error) = match state.service.list().await {
        Ok(tasks) => (Some(tasks.len()), None),
        Err(err) => {
            tracing::warn!(error = %err, "database check failed");
            (None, Some(err.to_string()))
        }
    };
    Json(DbCheckResponse {
        timestamp: Utc::now(),
        storage: state.storage.kind().to_owned(),
        database_url: state.storage.redacted_url(),
        database_connected: database_error.is_none(),
        task_count,
        database_error,
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_owned())
}
