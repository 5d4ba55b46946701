//! Adapter implementations for the board ports.

mod celebration;
mod http;
mod key_value;

pub use celebration::TracingCelebration;
pub use http::HttpTaskGateway;
pub use key_value::{FileKeyValueStore, InMemoryKeyValueStore};
