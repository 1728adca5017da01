//! Integration tests for boards saved to disk.

use std::sync::Arc;

use camino::Utf8Path;
use mockable::DefaultClock;
use rstest::rstest;
use taskflow::board::{
    adapters::{fs::FileSnapshotRepository, memory::RecordingNotifier},
    config::{BoardConfig, SeedMode},
    domain::Status,
    services::{AddTaskRequest, BoardService, MoveTaskRequest},
};

async fn open_in(
    path: &Utf8Path,
    config: BoardConfig,
) -> Result<BoardService<FileSnapshotRepository, RecordingNotifier, DefaultClock>, eyre::Report> {
    let repository = FileSnapshotRepository::open(path, config.snapshot_file.clone())?;
    let service = BoardService::open(
        Arc::new(repository),
        Arc::new(RecordingNotifier::new()),
        DefaultClock,
        config,
    )
    .await?;
    Ok(service)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopened_board_matches_saved_board() -> Result<(), eyre::Report> {
    let temp = tempfile::tempdir()?;
    let path = Utf8Path::from_path(temp.path())
        .ok_or_else(|| eyre::eyre!("temporary path is not UTF-8"))?;

    let first = open_in(path, BoardConfig::default()).await?;
    let task = first
        .add_task(AddTaskRequest::new("Persist me", "todo").with_priority("low"))
        .await?;
    first
        .move_task(MoveTaskRequest::new(task.id(), "todo", "review"))
        .await?;
    let before = first.snapshot();
    drop(first);

    let config = BoardConfig {
        seed: SeedMode::Demo,
        ..BoardConfig::default()
    };
    let second = open_in(path, config).await?;

    eyre::ensure!(*second.snapshot() == *before);
    eyre::ensure!(second.snapshot().locate(task.id()) == Some(Status::Review));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn demo_seed_is_used_until_first_save() -> Result<(), eyre::Report> {
    let temp = tempfile::tempdir()?;
    let path = Utf8Path::from_path(temp.path())
        .ok_or_else(|| eyre::eyre!("temporary path is not UTF-8"))?;
    let config = BoardConfig {
        seed: SeedMode::Demo,
        snapshot_file: "demo.json".to_owned(),
        ..BoardConfig::default()
    };

    let service = open_in(path, config).await?;

    eyre::ensure!(service.summary().total == 6);
    eyre::ensure!(!temp.path().join("demo.json").exists());
    Ok(())
}
