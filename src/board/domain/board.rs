//! Board aggregate: four status columns and the task map.

use super::{BoardError, BoardIntegrityError, Column, Status, Task, TaskId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Immutable point-in-time value of the board.
///
/// Columns and the task map sit behind [`Arc`], so cloning a board is cheap
/// and each transition copies only the parts it touches. Transitions take
/// `&self` and return a new board; a published board never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    todo: Arc<Column>,
    in_progress: Arc<Column>,
    review: Arc<Column>,
    done: Arc<Column>,
    tasks: Arc<HashMap<TaskId, Task>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            todo: Arc::new(Column::new(Status::Todo)),
            in_progress: Arc::new(Column::new(Status::InProgress)),
            review: Arc::new(Column::new(Status::Review)),
            done: Arc::new(Column::new(Status::Done)),
            tasks: Arc::new(HashMap::new()),
        }
    }

    /// Assembles a board from already validated parts.
    pub(crate) fn from_parts(columns: [Column; 4], tasks: HashMap<TaskId, Task>) -> Self {
        let mut board = Self {
            tasks: Arc::new(tasks),
            ..Self::new()
        };
        for column in columns {
            let status = column.status();
            *board.column_mut(status) = column;
        }
        board
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: Status) -> &Column {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Review => &self.review,
            Status::Done => &self.done,
        }
    }

    /// Iterates the columns in board order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> + '_ {
        Status::ALL.into_iter().map(|status| self.column(status))
    }

    /// Returns the task with `task_id`, if present.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.get(&task_id)
    }

    /// Iterates all tasks in unspecified order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.values()
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the board has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds the column currently holding `task_id` by scanning all columns.
    #[must_use]
    pub fn locate(&self, task_id: TaskId) -> Option<Status> {
        self.columns()
            .find(|column| column.contains(task_id))
            .map(Column::status)
    }

    /// Checks that every placed id resolves to a task whose status matches
    /// its column, and that every task is placed exactly once.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardIntegrityError`] found.
    pub fn check_invariants(&self) -> Result<(), BoardIntegrityError> {
        let mut seen = HashSet::new();
        for column in self.columns() {
            for task_id in column.task_ids() {
                let task = self
                    .tasks
                    .get(task_id)
                    .ok_or(BoardIntegrityError::DanglingTaskId {
                        column: column.status(),
                        task_id: *task_id,
                    })?;
                if task.status() != column.status() {
                    return Err(BoardIntegrityError::StatusMismatch {
                        task_id: *task_id,
                        status: task.status(),
                        column: column.status(),
                    });
                }
                if !seen.insert(*task_id) {
                    return Err(BoardIntegrityError::DuplicateTaskId(*task_id));
                }
            }
        }
        if let Some(orphan) = self.tasks.keys().find(|task_id| !seen.contains(*task_id)) {
            return Err(BoardIntegrityError::OrphanedTask(*orphan));
        }
        Ok(())
    }

    /// Returns a board with `task` appended to its status column.
    pub(crate) fn with_added(&self, task: Task) -> Self {
        let mut next = self.clone();
        next.column_mut(task.status()).push(task.id());
        Arc::make_mut(&mut next.tasks).insert(task.id(), task);
        next
    }

    /// Returns a board with the stored record for `task.id()` replaced.
    ///
    /// A status change moves the id to the end of the new column. The stored
    /// creation time is kept. Returns the record as stored.
    pub(crate) fn with_updated(&self, task: Task) -> Result<(Self, Task), BoardError> {
        let task_id = task.id();
        let stored = self.tasks.get(&task_id).ok_or(BoardError::NotFound(task_id))?;
        let current = self.locate(task_id).ok_or(BoardError::NotFound(task_id))?;
        let record = task.with_created_at(stored.created_at());

        let mut next = self.clone();
        if current != record.status() {
            next.column_mut(current).remove(task_id);
            next.column_mut(record.status()).push(task_id);
        }
        Arc::make_mut(&mut next.tasks).insert(task_id, record.clone());
        Ok((next, record))
    }

    /// Returns a board without `task_id`, plus the removed record.
    pub(crate) fn without_task(&self, task_id: TaskId) -> Result<(Self, Task), BoardError> {
        let current = self.locate(task_id).ok_or(BoardError::NotFound(task_id))?;
        let mut next = self.clone();
        let removed = Arc::make_mut(&mut next.tasks)
            .remove(&task_id)
            .ok_or(BoardError::NotFound(task_id))?;
        next.column_mut(current).remove(task_id);
        Ok((next, removed))
    }

    /// Returns a board with `task_id` moved from `from` to the end of `to`.
    ///
    /// The caller's claim about `from` is verified before anything changes.
    pub(crate) fn with_moved(
        &self,
        task_id: TaskId,
        from: Status,
        to: Status,
    ) -> Result<(Self, Task), BoardError> {
        let stored = self.tasks.get(&task_id).ok_or(BoardError::NotFound(task_id))?;
        if !self.column(from).contains(task_id) {
            return Err(BoardError::InconsistentMove { task_id, from, to });
        }
        let record = stored.clone().with_status(to);

        let mut next = self.clone();
        next.column_mut(from).remove(task_id);
        next.column_mut(to).push(task_id);
        Arc::make_mut(&mut next.tasks).insert(task_id, record.clone());
        Ok((next, record))
    }

    /// Returns a board with `task_id` placed at `index` within its column.
    pub(crate) fn with_repositioned(
        &self,
        task_id: TaskId,
        index: usize,
    ) -> Result<(Self, Task), BoardError> {
        let stored = self.tasks.get(&task_id).ok_or(BoardError::NotFound(task_id))?;
        let current = self.locate(task_id).ok_or(BoardError::NotFound(task_id))?;
        let record = stored.clone();

        let mut next = self.clone();
        next.column_mut(current).reposition(task_id, index);
        Ok((next, record))
    }

    fn column_mut(&mut self, status: Status) -> &mut Column {
        let column = match status {
            Status::Todo => &mut self.todo,
            Status::InProgress => &mut self.in_progress,
            Status::Review => &mut self.review,
            Status::Done => &mut self.done,
        };
        Arc::make_mut(column)
    }
}
