//! Shared world state for kanban board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskflow::board::{
    adapters::memory::{InMemorySnapshotRepository, RecordingNotifier},
    config::{BoardConfig, SeedMode},
    domain::{Task, TaskId},
    services::{BoardService, BoardServiceError},
};

/// Service type used by the BDD world.
pub type TestBoardService =
    BoardService<InMemorySnapshotRepository, RecordingNotifier, DefaultClock>;

/// Scenario world for kanban board behaviour tests.
#[derive(Default)]
pub struct KanbanWorld {
    pub service: Option<TestBoardService>,
    pub notifier: Arc<RecordingNotifier>,
    pub last_result: Option<Result<Task, BoardServiceError>>,
}

impl KanbanWorld {
    /// Opens a board seeded according to `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be opened.
    pub fn open(&mut self, seed: SeedMode) -> Result<(), eyre::Report> {
        let config = BoardConfig {
            seed,
            ..BoardConfig::default()
        };
        let service = run_async(BoardService::open(
            Arc::new(InMemorySnapshotRepository::new()),
            Arc::clone(&self.notifier),
            DefaultClock,
            config,
        ))?;
        self.service = Some(service);
        Ok(())
    }

    /// Returns the opened service.
    ///
    /// # Errors
    ///
    /// Returns an error if no board has been opened yet.
    pub fn service(&self) -> Result<&TestBoardService, eyre::Report> {
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no board opened in scenario world"))
    }

    /// Finds the identifier of the task titled `title`.
    ///
    /// # Errors
    ///
    /// Returns an error if no task has that title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.service()?
            .snapshot()
            .tasks()
            .find(|task| task.title() == title)
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanWorld {
    KanbanWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
