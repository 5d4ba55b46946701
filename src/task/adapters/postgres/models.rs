//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: String,
    /// Task text.
    pub content: String,
    /// Board column in canonical form.
    pub board_column: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last move timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: String,
    /// Task text.
    pub content: String,
    /// Board column in canonical form.
    pub board_column: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last move timestamp.
    pub updated_at: DateTime<Utc>,
}
