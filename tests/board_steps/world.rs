//! Shared world state for board synchronisation scenarios.

use kanban::board::{
    adapters::{HttpTaskGateway, InMemoryKeyValueStore},
    domain::{Lane, SyncMode},
    services::{BoardController, MoveOutcome},
};
use mockable::DefaultClock;
use rstest::fixture;

use crate::test_helpers::{RecordingCelebration, TestServer};

/// Board controller type driven by the scenarios.
pub type TestBoard =
    BoardController<HttpTaskGateway, InMemoryKeyValueStore, RecordingCelebration, DefaultClock>;

/// Scenario world for board behaviour tests.
#[derive(Default)]
pub struct BoardWorld {
    pub server: Option<TestServer>,
    pub board: Option<TestBoard>,
    pub celebration: RecordingCelebration,
    pub last_move: Option<MoveOutcome>,
}

impl BoardWorld {
    /// Returns the running server.
    pub fn server(&self) -> Result<&TestServer, eyre::Report> {
        self.server
            .as_ref()
            .ok_or_else(|| eyre::eyre!("task API was not started in this scenario"))
    }

    /// Returns the loaded board.
    pub fn board(&self) -> Result<&TestBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board was not loaded in this scenario"))
    }

    /// Returns the loaded board mutably.
    pub fn board_mut(&mut self) -> Result<&mut TestBoard, eyre::Report> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board was not loaded in this scenario"))
    }

    /// Finds the id of the card showing `content` in any lane.
    pub fn card_id(&self, content: &str) -> Result<String, eyre::Report> {
        let view = self.board()?.view();
        Lane::ALL
            .into_iter()
            .flat_map(|lane| view.lane(lane).iter())
            .find(|card| card.content == content)
            .map(|card| card.id.clone())
            .ok_or_else(|| eyre::eyre!("no card shows {content:?}"))
    }

    /// Builds a remote-mode board against the running server.
    pub fn load_board(&mut self) -> Result<(), eyre::Report> {
        let gateway = self.server()?.gateway()?;
        let mut board = BoardController::new(
            gateway,
            InMemoryKeyValueStore::new(),
            self.celebration.clone(),
            DefaultClock,
            SyncMode::Remote,
        );
        run_async(board.refresh());
        self.board = Some(board);
        Ok(())
    }
}

/// Parses a lane identifier from a step argument.
pub fn lane(id: &str) -> Result<Lane, eyre::Report> {
    Lane::from_id(id).ok_or_else(|| eyre::eyre!("unknown lane {id:?}"))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
