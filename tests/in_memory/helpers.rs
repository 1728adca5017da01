//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use taskflow::board::{
    adapters::memory::{InMemorySnapshotRepository, RecordingNotifier},
    config::BoardConfig,
    domain::TaskId,
    services::{AddTaskRequest, BoardService, BoardServiceError},
};

/// Service type used by the in-memory integration tests.
pub type TestService = BoardService<InMemorySnapshotRepository, RecordingNotifier, DefaultClock>;

/// Service together with the adapters it was opened with.
pub struct Opened {
    pub service: TestService,
    pub repository: Arc<InMemorySnapshotRepository>,
    pub notifier: Arc<RecordingNotifier>,
}

/// Opens a service over a fresh repository.
///
/// # Errors
///
/// Returns an error if the service cannot be opened.
pub async fn open(config: BoardConfig) -> Result<Opened, BoardServiceError> {
    let repository = Arc::new(InMemorySnapshotRepository::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = BoardService::open(
        Arc::clone(&repository),
        Arc::clone(&notifier),
        DefaultClock,
        config,
    )
    .await?;
    Ok(Opened {
        service,
        repository,
        notifier,
    })
}

/// Adds a task and returns its identifier.
///
/// # Errors
///
/// Returns an error if the request is rejected.
pub async fn add(
    service: &TestService,
    title: &str,
    column: &str,
) -> Result<TaskId, BoardServiceError> {
    let task = service.add_task(AddTaskRequest::new(title, column)).await?;
    Ok(task.id())
}
