//! Then steps for kanban board BDD scenarios.

use super::world::KanbanWorld;
use rstest_bdd_macros::then;
use taskflow::board::{
    domain::{BoardError, Status, Task},
    services::BoardServiceError,
};

fn parse_status(column: &str) -> Result<Status, eyre::Report> {
    Status::try_from(column).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

fn column_titles(world: &KanbanWorld, column: &str) -> Result<Vec<String>, eyre::Report> {
    let status = parse_status(column)?;
    let board = world.service()?.snapshot();
    Ok(board
        .column(status)
        .task_ids()
        .iter()
        .filter_map(|task_id| board.task(*task_id))
        .map(|task| task.title().to_owned())
        .collect())
}

#[then(r#"column "{column}" lists "{title}""#)]
fn column_lists(world: &KanbanWorld, column: String, title: String) -> Result<(), eyre::Report> {
    let titles = column_titles(world, &column)?;
    if !titles.contains(&title) {
        return Err(eyre::eyre!(
            "expected {title:?} in column {column}, found {titles:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{column}" is empty"#)]
fn column_is_empty(world: &KanbanWorld, column: String) -> Result<(), eyre::Report> {
    let titles = column_titles(world, &column)?;
    if !titles.is_empty() {
        return Err(eyre::eyre!("expected column {column} to be empty, found {titles:?}"));
    }
    Ok(())
}

#[then(r#"the task "{title}" has status "{status}""#)]
fn task_has_status(world: &KanbanWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task_id = world.task_id(&title)?;
    let actual = world.service()?.snapshot().task(task_id).map(Task::status);
    if actual != Some(expected) {
        return Err(eyre::eyre!("expected status {expected}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the last notice reads "{message}""#)]
fn last_notice_reads(world: &KanbanWorld, message: String) -> Result<(), eyre::Report> {
    let notice = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notice was sent"))?;
    if notice.message() != message {
        return Err(eyre::eyre!(
            "expected notice {message:?}, found {:?}",
            notice.message()
        ));
    }
    Ok(())
}

#[then("the operation fails with an inconsistent move error")]
fn fails_with_inconsistent_move(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    if !matches!(
        result,
        Err(BoardServiceError::Board(BoardError::InconsistentMove { .. }))
    ) {
        return Err(eyre::eyre!("expected InconsistentMove error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation fails with an invalid status error")]
fn fails_with_invalid_status(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    if !matches!(
        result,
        Err(BoardServiceError::Board(BoardError::InvalidStatus(_)))
    ) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }
    Ok(())
}

#[then("the board has {count:usize} tasks")]
fn board_has_tasks(world: &KanbanWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.service()?.snapshot().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then("the completion rate is {percent:usize} percent")]
fn completion_rate(world: &KanbanWorld, percent: usize) -> Result<(), eyre::Report> {
    let actual = world.service()?.summary().completion_percent();
    if actual != percent {
        return Err(eyre::eyre!("expected {percent}% complete, found {actual}%"));
    }
    Ok(())
}
