//! Board column enumeration and user-input normalization.

use super::{ParseColumnError, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kanban board column a task currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Column {
    /// Work not yet started. Every new task lands here.
    Todo,
    /// Work underway.
    InProgress,
    /// Finished work.
    Done,
}

impl Column {
    /// All columns in board order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Normalizes a user-supplied column name.
    ///
    /// Matching is case-insensitive and accepts both `IN_PROGRESS` and
    /// `INPROGRESS`. Surrounding whitespace is not stripped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidColumn`] carrying `raw` unchanged
    /// when the uppercased input names no column.
    pub fn normalize(raw: &str) -> Result<Self, TaskDomainError> {
        match raw.to_uppercase().as_str() {
            "TODO" => Ok(Self::Todo),
            "INPROGRESS" | "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(TaskDomainError::InvalidColumn(raw.to_owned())),
        }
    }
}

impl TryFrom<&str> for Column {
    type Error = ParseColumnError;

    /// Strict parse of the canonical representation, used for stored rows.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseColumnError(value.to_owned())),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
