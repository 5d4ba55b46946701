//! Board client: keeps three lanes of cards in sync with the task API.
//!
//! [`services::BoardController`] renders tasks into `todo`, `inprogress`,
//! and `done` lanes and applies add, delete, and drag-and-drop actions.
//! Changes go through a [`ports::TaskGateway`] while the API is reachable
//! and through a [`ports::KeyValueStore`] once it is not.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
