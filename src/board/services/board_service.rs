//! Service layer tying the board store to persistence and notifications.

use super::{AddTaskRequest, MoveTaskRequest};
use crate::board::{
    config::{BoardConfig, SeedMode},
    domain::{
        Board, BoardError, BoardIntegrityError, BoardSnapshot, Task, TaskDomainError, TaskId,
        demo_board,
    },
    ports::{BoardNotifier, BoardSnapshotRepository, Notice, SnapshotRepositoryError},
    projection::{self, BoardSummary, ColumnView, TaskFilter},
    store::{BoardStore, BoardUpdate},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, watch};

const CREATED: &str = "Task created successfully!";
const UPDATED: &str = "Task updated successfully!";
const DELETED: &str = "Task deleted successfully!";

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Task input failed validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The board refused the operation.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// A saved snapshot is inconsistent and the policy rejects it.
    #[error(transparent)]
    Integrity(#[from] BoardIntegrityError),
    /// Loading the saved snapshot failed.
    #[error(transparent)]
    Repository(#[from] SnapshotRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
///
/// Commands run against the store synchronously. After a successful
/// mutation the current board is saved through the repository; a failed
/// save is logged and never fails the command. Every command reports its
/// outcome to the notifier, except that successful moves and reorders are
/// silent.
#[derive(Clone)]
pub struct BoardService<R, N, C>
where
    R: BoardSnapshotRepository,
    N: BoardNotifier,
    C: Clock + Send + Sync,
{
    store: Arc<BoardStore<C>>,
    repository: Arc<R>,
    notifier: Arc<N>,
    config: BoardConfig,
    save_lock: Arc<Mutex<()>>,
}

impl<R, N, C> BoardService<R, N, C>
where
    R: BoardSnapshotRepository,
    N: BoardNotifier,
    C: Clock + Send + Sync,
{
    /// Opens the board: the saved snapshot when there is one, otherwise the
    /// seed board named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when loading fails, or
    /// [`BoardServiceError::Integrity`] when the saved snapshot is
    /// inconsistent under [`crate::board::domain::RehydrationPolicy::Reject`].
    pub async fn open(
        repository: Arc<R>,
        notifier: Arc<N>,
        clock: C,
        config: BoardConfig,
    ) -> BoardServiceResult<Self> {
        let board = if let Some(snapshot) = repository.load().await? {
            let board = snapshot.rehydrate(config.rehydration)?;
            tracing::info!(tasks = board.len(), "board opened from saved snapshot");
            board
        } else {
            let board = seed_board(config.seed, &clock)?;
            tracing::info!(seed = ?config.seed, tasks = board.len(), "board seeded");
            board
        };

        Ok(Self {
            store: Arc::new(BoardStore::with_board(board, clock)),
            repository,
            notifier,
            config,
            save_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<BoardStore<C>> {
        &self.store
    }

    /// Returns the configuration the service was opened with.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the current board.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        self.store.snapshot()
    }

    /// Returns a receiver that observes every published board.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Board>> {
        self.store.subscribe()
    }

    /// Returns the current board grouped by column.
    #[must_use]
    pub fn columns(&self) -> Vec<ColumnView> {
        projection::project(&self.snapshot())
    }

    /// Returns the tasks matching `filter`, newest first.
    #[must_use]
    pub fn search(&self, filter: &TaskFilter) -> Vec<Task> {
        filter.apply(&self.snapshot())
    }

    /// Returns the dashboard counts for the current board.
    #[must_use]
    pub fn summary(&self) -> BoardSummary {
        BoardSummary::of(&self.snapshot())
    }

    /// Returns the newest tasks, up to the configured limit.
    #[must_use]
    pub fn recent_tasks(&self) -> Vec<Task> {
        projection::recent_tasks(&self.snapshot(), self.config.recent_limit)
    }

    /// Creates a task from form input.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] with
    /// [`BoardError::InvalidStatus`] for an unknown column id, or
    /// [`BoardServiceError::Domain`] for a blank title or unknown priority.
    pub async fn add_task(&self, request: AddTaskRequest) -> BoardServiceResult<Task> {
        let result = request
            .into_draft()
            .map(|draft| self.store.add_task(draft));
        self.finish(result, Some(CREATED)).await
    }

    /// Replaces a task record, moving it if its status changed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] with [`BoardError::NotFound`]
    /// when the task is not on the board.
    pub async fn update_task(&self, task: Task) -> BoardServiceResult<Task> {
        let result = self.store.update_task(task).map_err(BoardServiceError::from);
        self.finish(result, Some(UPDATED)).await
    }

    /// Deletes a task and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] with [`BoardError::NotFound`]
    /// when the task is not on the board.
    pub async fn delete_task(&self, task_id: TaskId) -> BoardServiceResult<Task> {
        let result = self
            .store
            .delete_task(task_id)
            .map_err(BoardServiceError::from);
        self.finish(result, Some(DELETED)).await
    }

    /// Moves a task between columns using raw column ids.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] with
    /// [`BoardError::InvalidStatus`], [`BoardError::NotFound`] or
    /// [`BoardError::InconsistentMove`].
    pub async fn move_task(&self, request: MoveTaskRequest) -> BoardServiceResult<Task> {
        let result = request
            .parse()
            .and_then(|(task_id, from, to)| self.store.move_task(task_id, from, to))
            .map_err(BoardServiceError::from);
        self.finish(result, None).await
    }

    /// Places a task at `index` within its column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Board`] with [`BoardError::NotFound`]
    /// when the task is not on the board.
    pub async fn reposition_task(&self, task_id: TaskId, index: usize) -> BoardServiceResult<Task> {
        let result = self
            .store
            .reposition_task(task_id, index)
            .map_err(BoardServiceError::from);
        self.finish(result, None).await
    }

    /// Saves, notifies and unwraps the affected task.
    async fn finish(
        &self,
        result: BoardServiceResult<BoardUpdate>,
        success: Option<&str>,
    ) -> BoardServiceResult<Task> {
        match result {
            Ok(update) => {
                self.persist().await;
                if let Some(message) = success {
                    self.notifier.notify(&Notice::success(message));
                }
                let (_, task) = update.into_parts();
                Ok(task)
            }
            Err(err) => {
                self.notifier.notify(&Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Saves the latest board. Saves are serialised so the last one written
    /// always reflects the newest snapshot.
    async fn persist(&self) {
        let _guard = self.save_lock.lock().await;
        let snapshot = BoardSnapshot::from(self.store.snapshot().as_ref());
        if let Err(err) = self.repository.save(&snapshot).await {
            tracing::warn!(error = %err, "failed to save board snapshot");
        }
    }
}

fn seed_board(seed: SeedMode, clock: &impl Clock) -> Result<Board, TaskDomainError> {
    match seed {
        SeedMode::Empty => Ok(Board::new()),
        SeedMode::Demo => demo_board(clock),
    }
}
