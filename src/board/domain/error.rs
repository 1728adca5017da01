//! Error types for board operations, task validation and parsing.

use super::{Status, TaskId};
use thiserror::Error;

/// Errors returned while constructing or revising task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The priority value is not one of `low`, `medium` or `high`.
    #[error("unknown task priority: {0}")]
    InvalidPriority(String),

    /// The task identifier is not a valid UUID.
    #[error("invalid task identifier: {0}")]
    InvalidTaskId(String),
}

/// Errors returned by board store operations.
///
/// Every variant is recoverable. A failed operation leaves the current
/// snapshot exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The operation referenced a status outside the four board columns.
    #[error("unknown board status: {0}")]
    InvalidStatus(String),

    /// The referenced task does not exist on the board.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The claimed source column does not hold the task.
    #[error("task {task_id} is not in column '{from}', cannot move it to '{to}'")]
    InconsistentMove {
        /// Task the caller attempted to move.
        task_id: TaskId,
        /// Column the caller claimed holds the task.
        from: Status,
        /// Requested destination column.
        to: Status,
    },
}

impl From<ParseStatusError> for BoardError {
    fn from(err: ParseStatusError) -> Self {
        Self::InvalidStatus(err.0)
    }
}

/// Error returned while parsing a board status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown board status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

impl From<ParsePriorityError> for TaskDomainError {
    fn from(err: ParsePriorityError) -> Self {
        Self::InvalidPriority(err.0)
    }
}

/// Consistency violations found in a serialised board snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardIntegrityError {
    /// The snapshot names a column that is not a board status.
    #[error("snapshot contains unknown column '{0}'")]
    UnknownColumn(String),

    /// One of the four board columns is absent from the snapshot.
    #[error("snapshot is missing column '{0}'")]
    MissingColumn(Status),

    /// A column entry is keyed differently from the status it declares.
    #[error("column keyed '{key}' declares id '{declared}'")]
    ColumnKeyMismatch {
        /// Map key the column is stored under.
        key: Status,
        /// Status carried in the column's `id` field.
        declared: String,
    },

    /// A task entry is keyed by an identifier other than its own.
    #[error("task keyed {key} carries id {declared}")]
    TaskKeyMismatch {
        /// Map key the task is stored under.
        key: TaskId,
        /// Identifier carried by the task record.
        declared: TaskId,
    },

    /// A column references a task that is not in the task map.
    #[error("column '{column}' references unknown task {task_id}")]
    DanglingTaskId {
        /// Column holding the dangling reference.
        column: Status,
        /// Referenced identifier.
        task_id: TaskId,
    },

    /// A task sits in a column that does not match its status.
    #[error("task {task_id} has status '{status}' but sits in column '{column}'")]
    StatusMismatch {
        /// Task whose placement is wrong.
        task_id: TaskId,
        /// Status recorded on the task.
        status: Status,
        /// Column currently holding the task.
        column: Status,
    },

    /// A task identifier appears more than once across the columns.
    #[error("task {0} appears in more than one column position")]
    DuplicateTaskId(TaskId),

    /// A task in the map is not referenced by any column.
    #[error("task {0} is not placed in any column")]
    OrphanedTask(TaskId),
}
