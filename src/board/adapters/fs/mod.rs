//! File-backed snapshot repository.
//!
//! The snapshot is stored as pretty-printed JSON in a single file inside a
//! capability-scoped directory. Writes go to a sibling temporary file that
//! is then renamed over the target, so a crash mid-write leaves the previous
//! snapshot intact. File I/O is blocking and runs on Tokio's blocking pool.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use std::sync::Arc;

use crate::board::{
    domain::BoardSnapshot,
    ports::{BoardSnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult},
};

/// Snapshot repository writing one JSON file.
#[derive(Debug, Clone)]
pub struct FileSnapshotRepository {
    dir: Arc<Dir>,
    file_name: String,
}

impl FileSnapshotRepository {
    /// Creates a repository storing `file_name` inside `dir`.
    #[must_use]
    pub fn new(dir: Dir, file_name: impl Into<String>) -> Self {
        Self {
            dir: Arc::new(dir),
            file_name: file_name.into(),
        }
    }

    /// Opens the existing directory at `path` and stores `file_name` in it.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError::Persistence`] when the directory
    /// cannot be opened.
    pub fn open(path: &Utf8Path, file_name: impl Into<String>) -> SnapshotRepositoryResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(SnapshotRepositoryError::persistence)?;
        Ok(Self::new(dir, file_name))
    }

    /// Returns the snapshot file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Runs blocking file I/O on the blocking thread pool.
async fn run_blocking<F, T>(f: F) -> SnapshotRepositoryResult<T>
where
    F: FnOnce() -> SnapshotRepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(SnapshotRepositoryError::persistence)?
}

#[async_trait]
impl BoardSnapshotRepository for FileSnapshotRepository {
    async fn load(&self) -> SnapshotRepositoryResult<Option<BoardSnapshot>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        run_blocking(move || match dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotRepositoryError::persistence(err)),
        })
        .await
    }

    async fn save(&self, snapshot: &BoardSnapshot) -> SnapshotRepositoryResult<()> {
        let encoded = serde_json::to_string_pretty(snapshot)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        run_blocking(move || {
            let temp_name = format!("{file_name}.tmp");
            dir.write(&temp_name, encoded)
                .map_err(SnapshotRepositoryError::persistence)?;
            dir.rename(&temp_name, &dir, &file_name)
                .map_err(SnapshotRepositoryError::persistence)
        })
        .await
    }
}
