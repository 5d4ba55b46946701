//! Board lanes and the column-to-lane mapping.

use crate::task::domain::Column;
use std::fmt;

/// One of the three rendered board lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    /// Lane rendered for `TODO` tasks.
    Todo,
    /// Lane rendered for `IN_PROGRESS` tasks.
    InProgress,
    /// Lane rendered for `DONE` tasks.
    Done,
}

impl Lane {
    /// All lanes in board order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the lane identifier used by the board markup.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Looks up a lane by identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lane| lane.id() == id)
    }

    /// Returns the canonical column a card dropped in this lane belongs to.
    #[must_use]
    pub const fn column(self) -> Column {
        match self {
            Self::Todo => Column::Todo,
            Self::InProgress => Column::InProgress,
            Self::Done => Column::Done,
        }
    }
}

impl From<Column> for Lane {
    fn from(column: Column) -> Self {
        match column {
            Column::Todo => Self::Todo,
            Column::InProgress => Self::InProgress,
            Column::Done => Self::Done,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Maps a record's column value to a lane identifier.
///
/// Canonical columns use the fixed table; anything else falls back to the
/// lowercased column value, which may or may not name a lane.
#[must_use]
pub fn lane_id_for_column(column: &str) -> String {
    match Column::try_from(column) {
        Ok(canonical) => Lane::from(canonical).id().to_owned(),
        Err(_) => column.to_lowercase(),
    }
}
