//! Diesel schema for task persistence.

/// Idempotent DDL creating the `tasks` table and its ordering index.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_tasks/up.sql");

diesel::table! {
    /// Kanban task records.
    tasks (id) {
        /// Insertion sequence, used to break creation-time ties.
        seq -> Int8,
        /// Task identifier.
        #[max_length = 64]
        id -> Varchar,
        /// Task text.
        content -> Text,
        /// Board column in canonical form.
        #[max_length = 16]
        board_column -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last move timestamp.
        updated_at -> Timestamptz,
    }
}
