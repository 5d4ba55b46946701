//! Board controller: keeps the rendered lanes in step with persistence.
//!
//! The controller starts in the sync mode it is given. Any failed remote
//! call switches it to [`SyncMode::Local`] for the rest of its life, after
//! which every operation goes through the local store.

use mockable::Clock;
use thiserror::Error;

use super::local::LocalTaskStore;
use crate::board::{
    domain::{BoardState, BoardView, CardRecord, DragSession, Lane, SyncMode},
    ports::{Celebration, GatewayError, KeyValueStore, LocalStoreError, TaskGateway},
};

/// Errors surfaced to the user by board actions.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The entered task text was blank.
    #[error("Task content is required")]
    EmptyContent,
    /// Neither the API nor the local store could delete the task.
    #[error("Failed to delete task {id}")]
    DeleteFailed {
        /// Task that was not deleted.
        id: String,
        /// Local store failure that ended the attempt.
        #[source]
        source: LocalStoreError,
    },
}

/// Which path persisted a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The API accepted the change.
    Synced,
    /// The change went to the local store.
    Offline,
}

/// Result of dropping a dragged card on a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No drag was active, the card was gone, or the lane did not change.
    Ignored,
    /// The card was moved in the view.
    Moved {
        /// Path used to persist the move.
        sync: SyncOutcome,
        /// Whether the move reached storage.
        persisted: bool,
        /// Whether the completion effect fired.
        celebrated: bool,
    },
}

/// Drives the board: renders lanes, applies user actions, persists them.
pub struct BoardController<G, K, E, C> {
    gateway: G,
    local: LocalTaskStore<K>,
    celebration: E,
    clock: C,
    state: BoardState,
}

impl<G, K, E, C> BoardController<G, K, E, C>
where
    G: TaskGateway,
    K: KeyValueStore,
    E: Celebration,
    C: Clock + Send + Sync,
{
    /// Creates a controller with an empty board.
    pub fn new(gateway: G, store: K, celebration: E, clock: C, mode: SyncMode) -> Self {
        Self {
            gateway,
            local: LocalTaskStore::new(store),
            celebration,
            clock,
            state: BoardState::new(mode),
        }
    }

    /// Returns the controller state.
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns the rendered lanes.
    pub const fn view(&self) -> &BoardView {
        &self.state.view
    }

    /// Returns the current sync mode.
    pub const fn mode(&self) -> SyncMode {
        self.state.mode
    }

    /// Returns the local fallback store.
    pub const fn local_store(&self) -> &LocalTaskStore<K> {
        &self.local
    }

    /// Reloads every task and re-renders the lanes.
    pub async fn refresh(&mut self) -> &BoardView {
        let records = match self.state.mode {
            SyncMode::Remote => match self.gateway.list().await {
                Ok(records) => records,
                Err(err) => {
                    self.fall_back("list", &err);
                    self.local.load()
                }
            },
            SyncMode::Local => self.local.load(),
        };
        self.state.view = BoardView::render(records);
        for record in self.state.view.unplaced() {
            tracing::warn!(
                task_id = %record.id,
                column = %record.column,
                "task column names no lane; not rendered"
            );
        }
        &self.state.view
    }

    /// Adds a task to the `TODO` lane.
    ///
    /// `text` is trimmed before it is sent or stored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyContent`] when `text` is blank.
    pub async fn add_task(&mut self, text: &str) -> Result<SyncOutcome, BoardError> {
        let content = text.trim();
        if content.is_empty() {
            return Err(BoardError::EmptyContent);
        }

        if self.state.mode == SyncMode::Remote {
            match self.gateway.create(content).await {
                Ok(card) => {
                    self.state.view.push(Lane::Todo, card);
                    return Ok(SyncOutcome::Synced);
                }
                Err(err) => self.fall_back("create", &err),
            }
        }

        let card = CardRecord::new_todo(content, self.clock.utc());
        if let Err(err) = self.local.append(&card) {
            tracing::warn!(error = %err, task_id = %card.id, "could not store task locally");
        }
        self.state.view.push(Lane::Todo, card);
        Ok(SyncOutcome::Offline)
    }

    /// Deletes the task `id` and removes its card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DeleteFailed`] when the local store cannot be
    /// written after the API path failed or was skipped.
    pub async fn delete_task(&mut self, id: &str) -> Result<SyncOutcome, BoardError> {
        if self.state.mode == SyncMode::Remote {
            match self.gateway.delete(id).await {
                Ok(()) => {
                    self.state.view.remove(id);
                    return Ok(SyncOutcome::Synced);
                }
                Err(err) => self.fall_back("delete", &err),
            }
        }

        self.local
            .remove(id)
            .map_err(|source| BoardError::DeleteFailed {
                id: id.to_owned(),
                source,
            })?;
        self.state.view.remove(id);
        Ok(SyncOutcome::Offline)
    }

    /// Starts dragging the card `id`. Returns `false` if no such card is
    /// placed.
    pub fn begin_drag(&mut self, id: &str) -> bool {
        let Some(origin) = self.state.view.lane_of(id) else {
            return false;
        };
        self.state.drag = Some(DragSession {
            task_id: id.to_owned(),
            origin,
        });
        true
    }

    /// Cancels any active drag.
    pub fn end_drag(&mut self) {
        self.state.drag = None;
    }

    /// Drops the dragged card on `lane`.
    ///
    /// The card moves in the view before persistence is attempted. The
    /// completion effect fires only when the target is `DONE` and the move
    /// was persisted.
    pub async fn drop_on(&mut self, lane: Lane) -> MoveOutcome {
        let Some(session) = self.state.drag.take() else {
            return MoveOutcome::Ignored;
        };
        let id = session.task_id;
        if self.state.view.lane_of(&id) != Some(session.origin) || session.origin == lane {
            return MoveOutcome::Ignored;
        }

        self.state.view.relocate(&id, lane);
        let column = lane.column();

        let (sync, persisted) = match self.state.mode {
            SyncMode::Remote => match self.gateway.move_task(&id, column).await {
                Ok(_) => (SyncOutcome::Synced, true),
                Err(err) => {
                    self.fall_back("move", &err);
                    (SyncOutcome::Offline, self.move_locally(&id, lane))
                }
            },
            SyncMode::Local => (SyncOutcome::Offline, self.move_locally(&id, lane)),
        };

        let celebrated = persisted && lane == Lane::Done;
        if celebrated {
            self.celebration.celebrate(&id);
        }
        MoveOutcome::Moved {
            sync,
            persisted,
            celebrated,
        }
    }

    fn move_locally(&self, id: &str, lane: Lane) -> bool {
        match self.local.move_to(id, lane.column(), self.clock.utc()) {
            Ok(true) => true,
            Ok(false) => {
                tracing::warn!(task_id = id, "task missing from local store; move not saved");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, task_id = id, "could not save move locally");
                false
            }
        }
    }

    fn fall_back(&mut self, operation: &'static str, err: &GatewayError) {
        tracing::warn!(operation, error = %err, "task API failed; switching to local storage");
        self.state.mode = SyncMode::Local;
    }
}
