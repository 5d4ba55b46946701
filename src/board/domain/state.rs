//! Controller-owned board state.

use super::{BoardView, Lane};

/// Where the board reads and writes tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    /// Through the task API.
    Remote,
    /// Through the local key-value store only.
    #[default]
    Local,
}

/// An in-flight drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Identifier of the dragged card.
    pub task_id: String,
    /// Lane the card was picked up from.
    pub origin: Lane,
}

/// Everything the board controller tracks between user actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    /// Current persistence path.
    pub mode: SyncMode,
    /// Rendered lanes.
    pub view: BoardView,
    /// Active drag, if any.
    pub drag: Option<DragSession>,
}

impl BoardState {
    /// Creates empty state using `mode`.
    #[must_use]
    pub fn new(mode: SyncMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}
