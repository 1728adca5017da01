//! In-memory snapshot repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::BoardSnapshot,
    ports::{BoardSnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult},
};

/// Thread-safe in-memory snapshot repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotRepository {
    state: Arc<RwLock<InMemorySnapshotState>>,
}

#[derive(Debug, Default)]
struct InMemorySnapshotState {
    snapshot: Option<BoardSnapshot>,
    saves: usize,
}

impl InMemorySnapshotRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: BoardSnapshot) -> Self {
        let state = InMemorySnapshotState {
            snapshot: Some(snapshot),
            saves: 0,
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns how many times a snapshot has been saved.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.state.read().map_or(0, |state| state.saves)
    }
}

fn poisoned(err: impl std::fmt::Display) -> SnapshotRepositoryError {
    SnapshotRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardSnapshotRepository for InMemorySnapshotRepository {
    async fn load(&self) -> SnapshotRepositoryResult<Option<BoardSnapshot>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.snapshot.clone())
    }

    async fn save(&self, snapshot: &BoardSnapshot) -> SnapshotRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.snapshot = Some(snapshot.clone());
        state.saves += 1;
        Ok(())
    }
}
