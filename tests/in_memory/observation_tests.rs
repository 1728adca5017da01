//! In-memory integration tests for board observation.

use super::helpers::{add, open};
use rstest::rstest;
use std::sync::Arc;
use taskflow::board::{config::BoardConfig, domain::Status};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subscriber_wakes_on_change() -> Result<(), eyre::Report> {
    let opened = open(BoardConfig::default()).await?;
    let mut receiver = opened.service.subscribe();
    receiver.mark_unchanged();

    let watcher = tokio::spawn(async move {
        receiver.changed().await?;
        let board: Arc<_> = receiver.borrow_and_update().clone();
        Ok::<_, tokio::sync::watch::error::RecvError>(board)
    });
    let id = add(&opened.service, "Watched", "inProgress").await?;

    let seen = watcher.await??;
    eyre::ensure!(seen.column(Status::InProgress).contains(id));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn held_snapshot_is_unaffected_by_later_changes() -> Result<(), eyre::Report> {
    let opened = open(BoardConfig::default()).await?;
    let id = add(&opened.service, "Stable", "todo").await?;
    let held = opened.service.snapshot();

    opened.service.delete_task(id).await?;

    eyre::ensure!(held.task(id).is_some());
    eyre::ensure!(opened.service.snapshot().is_empty());
    Ok(())
}
