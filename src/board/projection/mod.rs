//! Read-only views derived from a board snapshot.
//!
//! Nothing here caches or mutates. Views are recomputed from whichever
//! snapshot the caller holds, which is cheap at board scale.

mod filter;
mod summary;

pub use filter::TaskFilter;
pub use summary::{BoardSummary, recent_tasks};

use crate::board::domain::{Board, Status, Task};

/// One column resolved into full task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    /// Status the column represents.
    pub status: Status,
    /// Column heading.
    pub title: &'static str,
    /// Tasks in display order.
    pub tasks: Vec<Task>,
}

/// Groups the board's tasks by column, in board order.
#[must_use]
pub fn project(board: &Board) -> Vec<ColumnView> {
    board
        .columns()
        .map(|column| ColumnView {
            status: column.status(),
            title: column.title(),
            tasks: column
                .task_ids()
                .iter()
                .filter_map(|task_id| board.task(*task_id).cloned())
                .collect(),
        })
        .collect()
}
