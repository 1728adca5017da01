//! When steps for kanban board BDD scenarios.

use super::world::{KanbanWorld, run_async};
use rstest_bdd_macros::when;
use taskflow::board::services::{AddTaskRequest, MoveTaskRequest};

#[when(r#"a task titled "{title}" is added to column "{column}""#)]
fn add_task(world: &mut KanbanWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let result = run_async(
        world
            .service()?
            .add_task(AddTaskRequest::new(title, column)),
    );
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{title}" is moved from "{from}" to "{to}""#)]
fn move_task(
    world: &mut KanbanWorld,
    title: String,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(
        world
            .service()?
            .move_task(MoveTaskRequest::new(task_id, from, to)),
    );
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{title}" is deleted"#)]
fn delete_task(world: &mut KanbanWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(world.service()?.delete_task(task_id));
    world.last_result = Some(result);
    Ok(())
}
