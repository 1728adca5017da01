//! Given steps for kanban board BDD scenarios.

use super::world::{KanbanWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskflow::board::{config::SeedMode, services::AddTaskRequest};

#[given("an empty board")]
fn empty_board(world: &mut KanbanWorld) -> Result<(), eyre::Report> {
    world.open(SeedMode::Empty)
}

#[given("the demo board")]
fn demo_board(world: &mut KanbanWorld) -> Result<(), eyre::Report> {
    world.open(SeedMode::Demo)
}

#[given(r#"a task titled "{title}" in column "{column}""#)]
fn task_in_column(
    world: &mut KanbanWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let service = world.service()?;
    run_async(service.add_task(AddTaskRequest::new(title, column)))
        .wrap_err("add task for scenario setup")?;
    Ok(())
}
