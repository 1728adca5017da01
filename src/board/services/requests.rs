//! Request payloads carrying raw input from forms and drag-and-drop.

use super::BoardServiceError;
use crate::board::domain::{BoardError, Priority, Status, TaskDomainError, TaskDraft, TaskId};
use chrono::{DateTime, Utc};

/// Request payload for creating a task from form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    status: String,
    priority: Option<String>,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<String>,
    tags: Vec<String>,
}

impl AddTaskRequest {
    /// Creates a request with the required title and column id.
    #[must_use]
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
            priority: None,
            description: None,
            due_date: None,
            assigned_to: None,
            tags: Vec::new(),
        }
    }

    /// Sets the priority name.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Parses the raw fields into a draft.
    pub(super) fn into_draft(self) -> Result<TaskDraft, BoardServiceError> {
        let status = Status::try_from(self.status.as_str()).map_err(BoardError::from)?;
        let mut draft = TaskDraft::new(self.title, status)?.with_tags(self.tags);
        if let Some(priority) = self.priority {
            let parsed = Priority::try_from(priority.as_str()).map_err(TaskDomainError::from)?;
            draft = draft.with_priority(parsed);
        }
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(due_date) = self.due_date {
            draft = draft.with_due_date(due_date);
        }
        if let Some(assignee) = self.assigned_to {
            draft = draft.with_assignee(assignee);
        }
        Ok(draft)
    }
}

/// Request payload for a drag-and-drop move between columns.
///
/// Column ids arrive as the strings the board view uses (`"todo"`,
/// `"inProgress"`, `"review"`, `"done"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTaskRequest {
    task_id: TaskId,
    from: String,
    to: String,
}

impl MoveTaskRequest {
    /// Creates a move request.
    #[must_use]
    pub fn new(task_id: TaskId, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            task_id,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Parses the column ids.
    pub(super) fn parse(&self) -> Result<(TaskId, Status, Status), BoardError> {
        let from = Status::try_from(self.from.as_str())?;
        let to = Status::try_from(self.to.as_str())?;
        Ok((self.task_id, from, to))
    }
}
