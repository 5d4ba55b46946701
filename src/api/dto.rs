//! Request and response bodies for the task API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::domain::{Column, Task};

/// Body of `POST /tasks`.
///
/// `content` is optional at the decoding level so that an absent field is
/// reported with the same message as a blank one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTaskPayload {
    /// Task text.
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of `PUT /tasks/{id}/move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveTaskPayload {
    /// Target column, in any accepted spelling.
    #[serde(default)]
    pub column: Option<String>,
}

/// Wire representation of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: String,
    /// Task text.
    pub content: String,
    /// Canonical board column.
    pub column: Column,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest move timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            content: task.content().as_str().to_owned(),
            column: task.column(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// Time the request was answered.
    pub timestamp: DateTime<Utc>,
}

/// Body of `GET /db-check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbCheckResponse {
    /// Time the check ran.
    pub timestamp: DateTime<Utc>,
    /// Storage backend, `memory` or `postgres`.
    pub storage: String,
    /// Connection string with credentials redacted; `null` for memory
    /// storage.
    pub database_url: Option<String>,
    /// Whether listing tasks succeeded.
    pub database_connected: bool,
    /// Number of stored tasks when the listing succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count: Option<usize>,
    /// Store error text when the listing failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_error: Option<String>,
}
