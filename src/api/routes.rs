//! Router assembly.

use axum::{
    Router,
    routing::{delete, get, put},
};
use mockable::Clock;
use tower_http::trace::TraceLayer;

use super::{
    handlers::{
        create_task, db_check, delete_task, health_check, list_tasks, move_task, not_found,
    },
    state::AppState,
};
use crate::task::ports::TaskRepository;

/// Builds the application router.
///
/// Task routes are served at the root (`/tasks`) and again under `/api`
/// (`/api/tasks`) for browser clients that use the prefixed paths.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = task_routes::<R, C>();
    Router::new()
        .route("/health", get(health_check))
        .route("/db-check", get(db_check::<R, C>))
        .merge(tasks.clone())
        .nest("/api", tasks)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn task_routes<R, C>() -> Router<AppState<R, C>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/tasks", get(list_tasks::<R, C>).post(create_task::<R, C>))
        .route("/tasks/{id}", delete(delete_task::<R, C>))
        .route("/tasks/{id}/move", put(move_task::<R, C>))
}
