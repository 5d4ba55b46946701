//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use kanban::task::services::CreateTaskRequest;
use rstest_bdd_macros::given;

#[given(r#"a task "{content}" exists"#)]
fn task_exists(world: &mut TaskWorld, content: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(CreateTaskRequest::new(content)))
        .wrap_err("create task for scenario setup")?;
    world.current_task = Some(created);
    Ok(())
}
