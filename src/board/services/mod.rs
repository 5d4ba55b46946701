//! Board services.

mod controller;
mod local;

pub use controller::{BoardController, BoardError, MoveOutcome, SyncOutcome};
pub use local::{LOCAL_TASKS_KEY, LocalTaskStore};
