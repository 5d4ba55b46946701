//! Service layer for task creation, listing, moves, and removal.

use crate::task::{
    domain::{Column, Task, TaskContent, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    content: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request carrying the task text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Creates a request with no content at all.
    ///
    /// Submitting it always fails validation; it models a body that omitted
    /// the field.
    #[must_use]
    pub const fn without_content() -> Self {
        Self { content: None }
    }
}

/// Request payload for moving a task between columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTaskRequest {
    task_id: TaskId,
    column: String,
}

impl MoveTaskRequest {
    /// Creates a move request.
    ///
    /// `column` is raw user input and is normalized by the service.
    #[must_use]
    pub fn new(task_id: TaskId, column: impl Into<String>) -> Self {
        Self {
            task_id,
            column: column.into(),
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// No task has the requested identifier.
    #[error("Task not found: {0}")]
    NotFound(TaskId),
    /// The store rejected the operation.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store read fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Creates a task in the `TODO` column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the content is missing or
    /// blank, or [`TaskLifecycleError::Repository`] when the store rejects the
    /// record.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let raw = request.content.ok_or(TaskDomainError::EmptyContent)?;
        let content = TaskContent::new(raw)?;
        let task = Task::new(content, &*self.clock);
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Physically removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has `id`,
    /// including when it was already removed.
    pub async fn remove(&self, id: &TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(task_id = %id, "task removed");
        Ok(())
    }

    /// Moves a task to the column named by the request.
    ///
    /// The column is validated before the store is consulted, so an invalid
    /// column is reported even for an unknown task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for an unrecognized column,
    /// [`TaskLifecycleError::NotFound`] for an unknown task, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn move_task(&self, request: MoveTaskRequest) -> TaskLifecycleResult<Task> {
        let MoveTaskRequest { task_id, column } = request;
        let target = Column::normalize(&column)?;

        let mut task = self
            .repository
            .find_by_id(&task_id)
            .await?
            .ok_or_else(|| TaskLifecycleError::NotFound(task_id.clone()))?;
        let from = task.column();
        task.move_to(target, &*self.clock);
        self.repository.update(&task).await?;
        tracing::info!(task_id = %task_id, %from, to = %target, "task moved");
        Ok(task)
    }
}
