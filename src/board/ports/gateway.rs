//! Port for reaching the task API from the board.

use async_trait::async_trait;
use thiserror::Error;

use crate::board::domain::CardRecord;
use crate::task::domain::Column;

/// Errors raised while talking to the task API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("task API unreachable: {0}")]
    Transport(String),
    /// The API answered with a non-success status.
    #[error("task API returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, usually an `{"error": ...}` document.
        body: String,
    },
    /// The response body did not decode.
    #[error("task API response could not be decoded: {0}")]
    Decode(String),
    /// The configured base URL is unusable.
    #[error("invalid task API URL: {0}")]
    InvalidUrl(String),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Remote task operations used by the board controller.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetches every task.
    async fn list(&self) -> GatewayResult<Vec<CardRecord>>;

    /// Creates a task with `content`.
    async fn create(&self, content: &str) -> GatewayResult<CardRecord>;

    /// Deletes the task `id`.
    async fn delete(&self, id: &str) -> GatewayResult<()>;

    /// Moves the task `id` to `column`.
    async fn move_task(&self, id: &str, column: Column) -> GatewayResult<CardRecord>;
}
