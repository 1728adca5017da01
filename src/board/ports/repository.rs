//! Repository port for saving and loading board snapshots.

use crate::board::domain::BoardSnapshot;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot repository operations.
pub type SnapshotRepositoryResult<T> = Result<T, SnapshotRepositoryError>;

/// Board snapshot persistence contract.
///
/// Implementations store one snapshot; saving replaces the previous one.
#[async_trait]
pub trait BoardSnapshotRepository: Send + Sync {
    /// Loads the last saved snapshot.
    ///
    /// Returns `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError::Serialization`] when the stored
    /// data cannot be decoded, or [`SnapshotRepositoryError::Persistence`]
    /// when the backing store fails.
    async fn load(&self) -> SnapshotRepositoryResult<Option<BoardSnapshot>>;

    /// Saves `snapshot`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError`] when encoding or writing fails.
    async fn save(&self, snapshot: &BoardSnapshot) -> SnapshotRepositoryResult<()>;
}

/// Errors returned by snapshot repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotRepositoryError {
    /// The snapshot could not be encoded or decoded.
    #[error("snapshot serialization error: {0}")]
    Serialization(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<serde_json::Error> for SnapshotRepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
