//! Searchable task list.

use crate::board::domain::{Board, Priority, Status, Task};

/// Search and filter criteria for the flat task list.
///
/// An empty filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search: String,
    priority: Option<Priority>,
    status: Option<Status>,
}

impl TaskFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to tasks whose title or description contains `search`,
    /// ignoring case.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restricts to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts to one status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns whether `task` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let search = self.search.trim();
        (search.is_empty() || task.matches_text(search))
            && self.priority.is_none_or(|priority| task.priority() == priority)
            && self.status.is_none_or(|status| task.status() == status)
    }

    /// Returns the matching tasks, newest first.
    #[must_use]
    pub fn apply(&self, board: &Board) -> Vec<Task> {
        let mut tasks: Vec<Task> = board
            .tasks()
            .filter(|task| self.matches(task))
            .cloned()
            .collect();
        sort_newest_first(&mut tasks);
        tasks
    }
}

/// Orders by creation time, newest first, falling back to the id so that
/// equal timestamps still give a stable order.
pub(super) fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| a.id().cmp(&b.id()))
    });
}
