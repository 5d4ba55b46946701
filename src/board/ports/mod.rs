//! Ports the board controller depends on.

mod celebration;
mod gateway;
mod store;

pub use celebration::Celebration;
pub use gateway::{GatewayError, GatewayResult, TaskGateway};
pub use store::{KeyValueStore, LocalStoreError};
