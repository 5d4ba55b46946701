//! Domain model for the kanban task lifecycle.
//!
//! The task domain models creation, column moves, and column-name
//! normalization while keeping all infrastructure concerns outside of the
//! domain boundary.

mod column;
mod error;
mod ids;
mod task;

pub use column::Column;
pub use error::{ParseColumnError, TaskDomainError};
pub use ids::{TaskContent, TaskId};
pub use task::{PersistedTaskData, Task};
