//! Kanban: a three-column task board with an HTTP API and a syncing client.
//!
//! Tasks live in `TODO`, `IN_PROGRESS`, or `DONE`. The server exposes them
//! over a small REST API; the board client renders them into lanes and keeps
//! working against a local store when the API is unavailable.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, storage)
//!
//! # Modules
//!
//! - [`task`]: Task records, column normalization, and the lifecycle service
//! - [`api`]: HTTP routes over the task service
//! - [`board`]: Client-side lane rendering, drag-and-drop, and offline fallback
//! - [`config`]: Environment-driven server configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod board;
pub mod config;
pub mod task;
pub mod telemetry;
