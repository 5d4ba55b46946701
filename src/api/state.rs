//! Shared handler state.

use std::sync::Arc;

use mockable::Clock;

use crate::config::StorageMode;
use crate::task::{ports::TaskRepository, services::TaskLifecycleService};

/// State handed to every task handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task lifecycle service all handlers delegate to.
    pub service: Arc<TaskLifecycleService<R, C>>,
    /// Storage backend reported by `GET /db-check`.
    pub storage: Arc<StorageMode>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates handler state around a repository and clock, reporting
    /// memory storage.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            service: Arc::new(TaskLifecycleService::new(repository, clock)),
            storage: Arc::new(StorageMode::Memory),
        }
    }

    /// Replaces the reported storage backend.
    #[must_use]
    pub fn with_storage(mut self, storage: StorageMode) -> Self {
        self.storage = Arc::new(storage);
        self
    }
}

// Manual impl: deriving would require `R: Clone` and `C: Clone`.
impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            storage: Arc::clone(&self.storage),
        }
    }
}
