//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool, connect_pool};
pub use schema::CREATE_TASKS_SQL;
