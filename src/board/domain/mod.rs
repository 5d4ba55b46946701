//! Domain model for the board client.
//!
//! Covers lane mapping, rendered lane contents, and the controller's
//! explicit state (sync mode and drag session).

mod card;
mod lane;
mod state;
mod view;

pub use card::CardRecord;
pub use lane::{Lane, lane_id_for_column};
pub use state::{BoardState, DragSession, SyncMode};
pub use view::BoardView;
