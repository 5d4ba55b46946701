//! In-memory integration tests for task lifecycle flows.

use std::sync::Arc;

use kanban::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Column,
    services::{CreateTaskRequest, MoveTaskRequest, TaskLifecycleError, TaskLifecycleService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_walks_across_the_board_and_is_removed(
    service: TestService,
) -> Result<(), eyre::Report> {
    let created = service.create(CreateTaskRequest::new("Ship it")).await?;
    let id = created.id().clone();

    let started = service
        .move_task(MoveTaskRequest::new(id.clone(), "in_progress"))
        .await?;
    assert_eq!(started.column(), Column::InProgress);
    assert_eq!(started.created_at(), created.created_at());
    assert!(started.updated_at() >= created.updated_at());

    let finished = service
        .move_task(MoveTaskRequest::new(id.clone(), "done"))
        .await?;
    assert_eq!(finished.column(), Column::Done);

    let listed = service.list().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(|task| task.column()), Some(Column::Done));

    service.remove(&id).await?;
    assert!(service.list().await?.is_empty());
    assert!(matches!(
        service.remove(&id).await,
        Err(TaskLifecycleError::NotFound(missing)) if missing == id
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_to_the_current_column_keeps_the_task(
    service: TestService,
) -> Result<(), eyre::Report> {
    let created = service.create(CreateTaskRequest::new("Stay")).await?;

    let moved = service
        .move_task(MoveTaskRequest::new(created.id().clone(), "TODO"))
        .await?;

    assert_eq!(moved.column(), Column::Todo);
    assert_eq!(moved.id(), created.id());
    assert_eq!(service.list().await?.len(), 1);
    Ok(())
}
