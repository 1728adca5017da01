//! Results of successful store operations.

use crate::board::domain::{Board, Status, Task};
use std::sync::Arc;

/// Kind of change a store operation made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardChange {
    /// A task was created.
    Added,
    /// A task record was replaced, possibly changing its column.
    Updated,
    /// A task was removed.
    Deleted,
    /// A task moved between columns.
    Moved {
        /// Column the task left.
        from: Status,
        /// Column the task joined.
        to: Status,
    },
    /// A task changed position inside its column.
    Repositioned {
        /// Requested position.
        index: usize,
    },
}

/// New snapshot produced by a successful operation, with the affected task.
///
/// For deletions the task is the record that was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardUpdate {
    snapshot: Arc<Board>,
    change: BoardChange,
    task: Task,
}

impl BoardUpdate {
    pub(crate) const fn new(snapshot: Arc<Board>, change: BoardChange, task: Task) -> Self {
        Self {
            snapshot,
            change,
            task,
        }
    }

    /// Returns the board published by the operation.
    #[must_use]
    pub const fn snapshot(&self) -> &Arc<Board> {
        &self.snapshot
    }

    /// Returns what the operation did.
    #[must_use]
    pub const fn change(&self) -> BoardChange {
        self.change
    }

    /// Returns the affected task as stored after the operation.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Splits the update into its snapshot and task.
    #[must_use]
    pub fn into_parts(self) -> (Arc<Board>, Task) {
        (self.snapshot, self.task)
    }
}
