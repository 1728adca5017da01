//! Serialisable board snapshots and validated rehydration.
//!
//! The snapshot layout mirrors what a browser page would keep in local
//! storage: a `columns` object keyed by status, each with `id`, `title` and
//! `taskIds`, and a `tasks` object keyed by task identifier. Snapshots come
//! from outside the process, so they are checked before they become a
//! [`Board`] again.

use super::{Board, BoardIntegrityError, Column, Status, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// What to do with a snapshot that violates board invariants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RehydrationPolicy {
    /// Refuse the snapshot and report the first violation.
    #[default]
    Reject,
    /// Fix the snapshot and keep as many tasks as possible.
    Repair,
}

/// Serialised column entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRecord {
    /// Status string the column represents.
    pub id: String,
    /// Column heading.
    pub title: String,
    /// Task identifiers in display order.
    pub task_ids: Vec<TaskId>,
}

/// Serialised board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Columns keyed by status string.
    pub columns: BTreeMap<String, ColumnRecord>,
    /// Task records keyed by identifier.
    pub tasks: BTreeMap<TaskId, Task>,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let columns = board
            .columns()
            .map(|column| {
                let record = ColumnRecord {
                    id: column.status().as_str().to_owned(),
                    title: column.title().to_owned(),
                    task_ids: column.task_ids().to_vec(),
                };
                (record.id.clone(), record)
            })
            .collect();
        let tasks = board.tasks().map(|task| (task.id(), task.clone())).collect();
        Self { columns, tasks }
    }
}

impl BoardSnapshot {
    /// Converts the snapshot into a board, refusing any inconsistency.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardIntegrityError`] found.
    pub fn validate(&self) -> Result<Board, BoardIntegrityError> {
        let mut columns: HashMap<Status, Vec<TaskId>> = HashMap::new();
        for (key, record) in &self.columns {
            let status = Status::try_from(key.as_str())
                .map_err(|_| BoardIntegrityError::UnknownColumn(key.clone()))?;
            if record.id != key.as_str() {
                return Err(BoardIntegrityError::ColumnKeyMismatch {
                    key: status,
                    declared: record.id.clone(),
                });
            }
            columns.insert(status, record.task_ids.clone());
        }

        if let Some(missing) = Status::ALL
            .into_iter()
            .find(|status| !columns.contains_key(status))
        {
            return Err(BoardIntegrityError::MissingColumn(missing));
        }
        let parts = Status::ALL.map(|status| {
            Column::with_task_ids(status, columns.remove(&status).unwrap_or_default())
        });

        let mut tasks = HashMap::with_capacity(self.tasks.len());
        for (key, task) in &self.tasks {
            if *key != task.id() {
                return Err(BoardIntegrityError::TaskKeyMismatch {
                    key: *key,
                    declared: task.id(),
                });
            }
            tasks.insert(*key, task.clone());
        }

        let board = Board::from_parts(parts, tasks);
        board.check_invariants()?;
        Ok(board)
    }

    /// Converts the snapshot into a board, fixing what it can.
    ///
    /// Dangling and repeated ids are dropped, misplaced ids move to the
    /// column matching their task's status, and unplaced tasks are appended
    /// to their status column. Returns the board and the issues fixed.
    #[must_use]
    pub fn repair(&self) -> (Board, Vec<BoardIntegrityError>) {
        let mut issues = Vec::new();

        let mut tasks: HashMap<TaskId, Task> = HashMap::with_capacity(self.tasks.len());
        for (key, task) in &self.tasks {
            if *key != task.id() {
                issues.push(BoardIntegrityError::TaskKeyMismatch {
                    key: *key,
                    declared: task.id(),
                });
            }
            tasks.entry(task.id()).or_insert_with(|| task.clone());
        }

        let mut declared: HashMap<Status, &[TaskId]> = HashMap::new();
        for (key, record) in &self.columns {
            match Status::try_from(key.as_str()) {
                Ok(status) => {
                    declared.insert(status, &record.task_ids);
                }
                Err(_) => issues.push(BoardIntegrityError::UnknownColumn(key.clone())),
            }
        }

        let mut placed: HashMap<Status, Vec<TaskId>> = HashMap::new();
        let mut misplaced = Vec::new();
        let mut seen = HashSet::new();
        for status in Status::ALL {
            let Some(task_ids) = declared.get(&status) else {
                issues.push(BoardIntegrityError::MissingColumn(status));
                continue;
            };
            for task_id in *task_ids {
                let Some(task) = tasks.get(task_id) else {
                    issues.push(BoardIntegrityError::DanglingTaskId {
                        column: status,
                        task_id: *task_id,
                    });
                    continue;
                };
                if !seen.insert(*task_id) {
                    issues.push(BoardIntegrityError::DuplicateTaskId(*task_id));
                    continue;
                }
                if task.status() == status {
                    placed.entry(status).or_default().push(*task_id);
                } else {
                    issues.push(BoardIntegrityError::StatusMismatch {
                        task_id: *task_id,
                        status: task.status(),
                        column: status,
                    });
                    misplaced.push(task);
                }
            }
        }
        for task in misplaced {
            placed.entry(task.status()).or_default().push(task.id());
        }

        let mut orphans: Vec<&Task> = tasks
            .values()
            .filter(|task| !seen.contains(&task.id()))
            .collect();
        orphans.sort_by_key(|task| (task.created_at(), task.id()));
        for task in orphans {
            issues.push(BoardIntegrityError::OrphanedTask(task.id()));
            placed.entry(task.status()).or_default().push(task.id());
        }

        let parts = Status::ALL
            .map(|status| Column::with_task_ids(status, placed.remove(&status).unwrap_or_default()));
        (Board::from_parts(parts, tasks), issues)
    }

    /// Converts the snapshot into a board according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardIntegrityError`] when the policy is
    /// [`RehydrationPolicy::Reject`] and the snapshot is inconsistent.
    pub fn rehydrate(&self, policy: RehydrationPolicy) -> Result<Board, BoardIntegrityError> {
        match policy {
            RehydrationPolicy::Reject => self.validate(),
            RehydrationPolicy::Repair => {
                let (board, issues) = self.repair();
                for issue in &issues {
                    tracing::warn!(%issue, "repaired board snapshot");
                }
                Ok(board)
            }
        }
    }
}

