//! Dashboard counts and the recent-task list.

use super::filter::sort_newest_first;
use crate::board::domain::{Board, Priority, Status, Task};

/// Headline counts for a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardSummary {
    /// All tasks on the board.
    pub total: usize,
    /// Tasks in the done column.
    pub completed: usize,
    /// Tasks in the in-progress column.
    pub in_progress: usize,
    /// Tasks with high priority, whatever their column.
    pub high_priority: usize,
}

impl BoardSummary {
    /// Counts the tasks on `board`.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        board.tasks().fold(Self::default(), |mut summary, task| {
            summary.total += 1;
            match task.status() {
                Status::Done => summary.completed += 1,
                Status::InProgress => summary.in_progress += 1,
                Status::Todo | Status::Review => {}
            }
            if task.priority() == Priority::High {
                summary.high_priority += 1;
            }
            summary
        })
    }

    /// Returns the share of completed tasks as a whole percentage, rounded
    /// down. An empty board is 0% complete.
    #[must_use]
    pub fn completion_percent(&self) -> usize {
        self.completed
            .saturating_mul(100)
            .checked_div(self.total)
            .unwrap_or(0)
    }
}

/// Returns up to `limit` tasks, newest first.
#[must_use]
pub fn recent_tasks(board: &Board, limit: usize) -> Vec<Task> {
    let mut tasks: Vec<Task> = board.tasks().cloned().collect();
    sort_newest_first(&mut tasks);
    tasks.truncate(limit);
    tasks
}
