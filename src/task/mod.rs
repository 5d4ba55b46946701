//! Task lifecycle management.
//!
//! Tasks are created in the `TODO` column, moved between the three board
//! columns, and physically deleted. Column names supplied by callers are
//! normalized case-insensitively before they reach storage. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
