//! Then steps for board synchronisation scenarios.

use super::world::{BoardWorld, lane, run_async};
use kanban::board::{domain::SyncMode, ports::TaskGateway, services::MoveOutcome};
use rstest_bdd_macros::then;

#[then(r#"the "{target}" lane shows "{content}""#)]
fn lane_shows(world: &BoardWorld, target: String, content: String) -> Result<(), eyre::Report> {
    let target = lane(&target)?;
    let shown = world
        .board()?
        .view()
        .lane(target)
        .iter()
        .any(|card| card.content == content);
    eyre::ensure!(shown, "{target} lane does not show {content:?}");
    Ok(())
}

#[then(r#"the server lists "{content}" in column "{column}""#)]
fn server_lists(world: &BoardWorld, content: String, column: String) -> Result<(), eyre::Report> {
    let gateway = world.server()?.gateway()?;
    let tasks = run_async(gateway.list())?;
    let found = tasks
        .iter()
        .find(|task| task.content == content)
        .ok_or_else(|| eyre::eyre!("server has no task {content:?}"))?;
    eyre::ensure!(
        found.column == column,
        "expected {content:?} in {column}, found {}",
        found.column
    );
    Ok(())
}

#[then(r#"the completion effect played for "{content}""#)]
fn completion_played(world: &BoardWorld, content: String) -> Result<(), eyre::Report> {
    let id = world.card_id(&content)?;
    let calls = world.celebration.calls();
    eyre::ensure!(calls == [id.clone()], "expected one celebration for {id}, got {calls:?}");
    Ok(())
}

#[then("no completion effect played")]
fn no_completion(world: &BoardWorld) -> Result<(), eyre::Report> {
    let calls = world.celebration.calls();
    eyre::ensure!(calls.is_empty(), "unexpected celebrations: {calls:?}");
    Ok(())
}

#[then("the move is ignored")]
fn move_ignored(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_move == Some(MoveOutcome::Ignored),
        "expected an ignored move, got {:?}",
        world.last_move
    );
    Ok(())
}

#[then("the board is in local mode")]
fn board_is_local(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.board()?.mode() == SyncMode::Local,
        "board is still in remote mode"
    );
    Ok(())
}

#[then(r#"the local store holds "{content}" in column "{column}""#)]
fn local_store_holds(
    world: &BoardWorld,
    content: String,
    column: String,
) -> Result<(), eyre::Report> {
    let stored = world.board()?.local_store().load();
    let found = stored
        .iter()
        .find(|card| card.content == content)
        .ok_or_else(|| eyre::eyre!("local store has no task {content:?}"))?;
    eyre::ensure!(
        found.column == column,
        "expected {content:?} in {column}, found {}",
        found.column
    );
    Ok(())
}
