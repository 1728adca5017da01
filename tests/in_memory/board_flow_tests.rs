//! In-memory integration tests for task flows across the board.

use super::helpers::{add, open};
use rstest::rstest;
use taskflow::board::{
    config::BoardConfig,
    domain::{Priority, Status},
    ports::{BoardSnapshotRepository, NoticeLevel},
    projection::TaskFilter,
    services::MoveTaskRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_travels_across_every_column() -> Result<(), eyre::Report> {
    let opened = open(BoardConfig::default()).await?;
    let service = &opened.service;
    let id = add(service, "Launch checklist", "todo").await?;

    for (from, to) in [
        ("todo", "inProgress"),
        ("inProgress", "review"),
        ("review", "done"),
    ] {
        service
            .move_task(MoveTaskRequest::new(id, from, to))
            .await?;
    }

    let board = service.snapshot();
    eyre::ensure!(board.column(Status::Done).task_ids() == [id]);
    eyre::ensure!(board.check_invariants().is_ok());
    eyre::ensure!(service.summary().completion_percent() == 100);
    eyre::ensure!(opened.repository.save_count() == 4);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_changes_column_and_keeps_history() -> Result<(), eyre::Report> {
    let opened = open(BoardConfig::default()).await?;
    let service = &opened.service;
    let id = add(service, "Audit logs", "todo").await?;
    let original = service
        .snapshot()
        .task(id)
        .cloned()
        .ok_or_else(|| eyre::eyre!("task missing after add"))?;

    let updated = service
        .update_task(
            original
                .clone()
                .with_status(Status::Review)
                .with_priority(Priority::High),
        )
        .await?;

    eyre::ensure!(updated.created_at() == original.created_at());
    eyre::ensure!(service.snapshot().locate(id) == Some(Status::Review));
    let high = service.search(&TaskFilter::new().with_priority(Priority::High));
    eyre::ensure!(high.len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failures_are_reported_and_not_saved() -> Result<(), eyre::Report> {
    let opened = open(BoardConfig::default()).await?;
    let service = &opened.service;
    let id = add(service, "Fragile", "review").await?;

    let stale = service
        .move_task(MoveTaskRequest::new(id, "todo", "done"))
        .await;
    let unknown = service
        .move_task(MoveTaskRequest::new(id, "review", "archive"))
        .await;

    eyre::ensure!(stale.is_err() && unknown.is_err());
    eyre::ensure!(opened.repository.save_count() == 1);
    let errors = opened
        .notifier
        .notices()
        .iter()
        .filter(|notice| notice.level() == NoticeLevel::Error)
        .count();
    eyre::ensure!(errors == 2);
    let saved = opened
        .repository
        .load()
        .await?
        .ok_or_else(|| eyre::eyre!("nothing saved"))?;
    eyre::ensure!(saved.validate()? == *service.snapshot());
    Ok(())
}
