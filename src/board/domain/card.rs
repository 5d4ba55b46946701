//! Client-side task records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::domain::{Column, TaskId};

/// Task as seen by the board: the API's JSON shape, also used verbatim in
/// the local fallback store.
///
/// `column` stays a plain string because locally stored records are not
/// guaranteed to hold a canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Task identifier.
    pub id: String,
    /// Task text.
    pub content: String,
    /// Column value as stored.
    pub column: String,
    /// Creation timestamp, absent in some hand-written local records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Latest move timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CardRecord {
    /// Builds a fresh `TODO` record for offline creation.
    #[must_use]
    pub fn new_todo(content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::generate().into_inner(),
            content: content.into(),
            column: Column::Todo.as_str().to_owned(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
