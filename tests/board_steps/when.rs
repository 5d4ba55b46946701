//! When steps for board synchronisation scenarios.

use super::world::{BoardWorld, lane, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the user adds the task "{content}""#)]
fn user_adds_task(world: &mut BoardWorld, content: String) -> Result<(), eyre::Report> {
    run_async(world.board_mut()?.add_task(&content)).wrap_err("add task")?;
    Ok(())
}

#[when(r#"the user drags "{content}" to the "{target}" lane"#)]
fn user_drags_card(
    world: &mut BoardWorld,
    content: String,
    target: String,
) -> Result<(), eyre::Report> {
    let id = world.card_id(&content)?;
    let target = lane(&target)?;
    let board = world.board_mut()?;
    eyre::ensure!(board.begin_drag(&id), "card {id} cannot be dragged");
    let outcome = run_async(board.drop_on(target));
    world.last_move = Some(outcome);
    Ok(())
}
