//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task content is missing or blank.
    #[error("Content is required")]
    EmptyContent,

    /// The requested column is not one of the board columns.
    ///
    /// Carries the caller's original, un-normalized input.
    #[error("Invalid column value: {0}")]
    InvalidColumn(String),
}

/// Error returned while parsing board columns from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown board column: {0}")]
pub struct ParseColumnError(pub String);
