//! HTTP surface for the task service.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/tasks` | 200, array of tasks |
//! | POST | `/tasks` | 201, created task |
//! | DELETE | `/tasks/{id}` | 204 |
//! | PUT | `/tasks/{id}/move` | 200, updated task |
//! | GET | `/health` | 200 `{status, timestamp}` |
//! | GET | `/db-check` | 200, storage diagnostics |
//!
//! Errors are returned as `{"error": "<message>"}` with 400, 404, or 500.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use routes::router;
pub use state::AppState;
