//! In-memory adapter implementations for the task module.

mod task;

pub use task::InMemoryTaskRepository;
