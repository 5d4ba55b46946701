//! Task aggregate root.

use super::{Column, TaskContent, TaskId};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;

/// Task aggregate root.
///
/// A task is created in [`Column::Todo`], changes column only through
/// [`Task::move_to`], and never changes its identifier or content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    content: TaskContent,
    column: Column,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task text.
    pub content: TaskContent,
    /// Persisted board column.
    pub column: Column,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest move timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the `TODO` column with a fresh identifier.
    #[must_use]
    pub fn new(content: TaskContent, clock: &impl Clock) -> Self {
        Self::with_id(TaskId::generate(), content, clock)
    }

    /// Creates a new `TODO` task under a caller-chosen identifier.
    #[must_use]
    pub fn with_id(id: TaskId, content: TaskContent, clock: &impl Clock) -> Self {
        let timestamp = stamp(clock);
        Self {
            id,
            content,
            column: Column::Todo,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            content: data.content,
            column: data.column,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn content(&self) -> &TaskContent {
        &self.content
    }

    /// Returns the current board column.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest move timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Places the task in `column` and refreshes `updated_at`.
    ///
    /// Moving into the current column is allowed and still counts as a move.
    pub fn move_to(&mut self, column: Column, clock: &impl Clock) {
        self.column = column;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = stamp(clock);
    }
}

/// Reads `clock` at the microsecond precision `TIMESTAMPTZ` stores.
fn stamp(clock: &impl Clock) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(6)
}
