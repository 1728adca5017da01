//! Board store: the single owner of the current board snapshot.
//!
//! Every operation is synchronous and atomic. Writers are serialised; each
//! one computes a new [`Board`] from the current snapshot and swaps it in
//! whole, so readers holding an earlier `Arc<Board>` keep a consistent view
//! and a failed operation changes nothing. Subscribers are told about every
//! swap through a [`tokio::sync::watch`] channel.

mod change;

pub use change::{BoardChange, BoardUpdate};

use crate::board::domain::{
    Board, BoardError, BoardIntegrityError, BoardSnapshot, RehydrationPolicy, Status, Task,
    TaskDraft, TaskId,
};
use mockable::Clock;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

/// Owned, explicitly shared task board.
///
/// Hand the store (usually behind an [`Arc`]) to whichever views need it
/// and use [`BoardStore::subscribe`] to learn about changes.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use taskflow::board::domain::{Status, TaskDraft};
/// use taskflow::board::store::BoardStore;
///
/// let store = BoardStore::new(DefaultClock);
/// let draft = TaskDraft::new("Write release notes", Status::Todo).expect("valid draft");
/// let update = store.add_task(draft);
///
/// let board = store.snapshot();
/// assert_eq!(board.column(Status::Todo).task_ids(), &[update.task().id()]);
/// ```
#[derive(Debug)]
pub struct BoardStore<C: Clock> {
    clock: C,
    writer: Mutex<()>,
    state: watch::Sender<Arc<Board>>,
}

impl<C: Clock> BoardStore<C> {
    /// Creates a store holding an empty board.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_board(Board::new(), clock)
    }

    /// Creates a store holding `board`.
    #[must_use]
    pub fn with_board(board: Board, clock: C) -> Self {
        let (state, _) = watch::channel(Arc::new(board));
        Self {
            clock,
            writer: Mutex::new(()),
            state,
        }
    }

    /// Creates a store from a previously saved snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardIntegrityError`] when `policy` is
    /// [`RehydrationPolicy::Reject`] and the snapshot is inconsistent.
    pub fn from_snapshot(
        snapshot: &BoardSnapshot,
        policy: RehydrationPolicy,
        clock: C,
    ) -> Result<Self, BoardIntegrityError> {
        let board = snapshot.rehydrate(policy)?;
        Ok(Self::with_board(board, clock))
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&*self.state.borrow())
    }

    /// Returns a receiver that observes every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Board>> {
        self.state.subscribe()
    }

    /// Replaces the whole board with a rehydrated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardIntegrityError`] when `policy` is
    /// [`RehydrationPolicy::Reject`] and the snapshot is inconsistent. The
    /// current board is kept in that case.
    pub fn restore(
        &self,
        snapshot: &BoardSnapshot,
        policy: RehydrationPolicy,
    ) -> Result<Arc<Board>, BoardIntegrityError> {
        let board = Arc::new(snapshot.rehydrate(policy)?);
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.state.send_replace(Arc::clone(&board));
        tracing::info!(tasks = board.len(), "board restored from snapshot");
        Ok(board)
    }

    /// Adds a task built from `draft` to the end of its status column.
    ///
    /// The task gets a fresh identifier and the current clock time. Adding
    /// cannot fail: the draft's status is always one of the four columns.
    pub fn add_task(&self, draft: TaskDraft) -> BoardUpdate {
        let task = Task::from_draft(draft, &self.clock);
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let next = self.snapshot().with_added(task.clone());
        self.publish(next, task, BoardChange::Added)
    }

    /// Replaces the stored record for `task.id()`.
    ///
    /// When the status differs from the column holding the task, the id
    /// moves to the end of the new column. The creation time cannot be
    /// changed and is taken from the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when the task is not on the board.
    pub fn update_task(&self, task: Task) -> Result<BoardUpdate, BoardError> {
        self.apply(|board| {
            let (next, stored) = board.with_updated(task)?;
            Ok((next, stored, BoardChange::Updated))
        })
    }

    /// Removes a task from its column and from the task map.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when the task is not on the board,
    /// including when it was already deleted.
    pub fn delete_task(&self, task_id: TaskId) -> Result<BoardUpdate, BoardError> {
        self.apply(|board| {
            let (next, removed) = board.without_task(task_id)?;
            Ok((next, removed, BoardChange::Deleted))
        })
    }

    /// Moves a task from `from` to the end of `to` and sets its status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when the task is not on the board,
    /// or [`BoardError::InconsistentMove`] when `from` does not hold it.
    pub fn move_task(
        &self,
        task_id: TaskId,
        from: Status,
        to: Status,
    ) -> Result<BoardUpdate, BoardError> {
        self.apply(|board| {
            let (next, moved) = board.with_moved(task_id, from, to)?;
            Ok((next, moved, BoardChange::Moved { from, to }))
        })
    }

    /// Places a task at `index` within its current column.
    ///
    /// Indices past the end put the task last.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when the task is not on the board.
    pub fn reposition_task(&self, task_id: TaskId, index: usize) -> Result<BoardUpdate, BoardError> {
        self.apply(|board| {
            let (next, task) = board.with_repositioned(task_id, index)?;
            Ok((next, task, BoardChange::Repositioned { index }))
        })
    }

    fn apply<F>(&self, transition: F) -> Result<BoardUpdate, BoardError>
    where
        F: FnOnce(&Board) -> Result<(Board, Task, BoardChange), BoardError>,
    {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.snapshot();
        match transition(current.as_ref()) {
            Ok((next, task, change)) => Ok(self.publish(next, task, change)),
            Err(err) => {
                tracing::warn!(error = %err, "board operation rejected");
                Err(err)
            }
        }
    }

    /// Swaps in `next`. Callers hold the writer lock.
    fn publish(&self, next: Board, task: Task, change: BoardChange) -> BoardUpdate {
        let snapshot = Arc::new(next);
        self.state.send_replace(Arc::clone(&snapshot));
        tracing::debug!(
            task_id = %task.id(),
            status = %task.status(),
            ?change,
            "board updated"
        );
        BoardUpdate::new(snapshot, change, task)
    }
}
