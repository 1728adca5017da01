//! Status columns holding ordered task identifiers.

use super::{Status, TaskId};

/// One of the four fixed board columns.
///
/// The order of `task_ids` is the manual arrangement shown on the board;
/// newly placed tasks go to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    status: Status,
    task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column for `status`.
    #[must_use]
    pub const fn new(status: Status) -> Self {
        Self {
            status,
            task_ids: Vec::new(),
        }
    }

    pub(crate) const fn with_task_ids(status: Status, task_ids: Vec<TaskId>) -> Self {
        Self { status, task_ids }
    }

    /// Returns the status this column represents.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.status.title()
    }

    /// Returns the task identifiers in display order.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns whether the column holds `task_id`.
    #[must_use]
    pub fn contains(&self, task_id: TaskId) -> bool {
        self.task_ids.contains(&task_id)
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns whether the column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    pub(super) fn push(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    pub(super) fn remove(&mut self, task_id: TaskId) {
        self.task_ids.retain(|id| *id != task_id);
    }

    /// Moves `task_id` to `index`, clamped to the end of the column.
    pub(super) fn reposition(&mut self, task_id: TaskId, index: usize) {
        self.remove(task_id);
        let clamped = index.min(self.task_ids.len());
        self.task_ids.insert(clamped, task_id);
    }
}
