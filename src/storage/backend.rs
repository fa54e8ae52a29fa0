//! Backend

use crate::storage::SnapshotStore;
use crate::task::Task;
use crate::TaskListError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Snapshot kept in a single JSON file
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    /// Create a snapshot store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshot {
    async fn load(&self) -> crate::Result<Vec<Task>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            TaskListError::PersistenceUnavailable(format!(
                "could not read {}: {e}",
                self.path.display()
            ))
        })?;

        let tasks: Vec<Task> = serde_json::from_slice(&bytes).map_err(|e| {
            TaskListError::PersistenceUnavailable(format!(
                "could not parse {}: {e}",
                self.path.display()
            ))
        })?;

        debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    async fn save(&self, tasks: &[Task]) -> crate::Result<()> {
        let data = serde_json::to_vec_pretty(tasks).map_err(|e| {
            TaskListError::PersistenceUnavailable(format!("could not serialize tasks: {e}"))
        })?;

        tokio::fs::write(&self.path, data).await.map_err(|e| {
            TaskListError::PersistenceUnavailable(format!(
                "could not write {}: {e}",
                self.path.display()
            ))
        })?;

        debug!("Wrote {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory snapshot, shared between clones
///
/// An empty cell behaves like a snapshot file that was never written.
#[derive(Clone, Default)]
pub struct MemorySnapshot {
    contents: Arc<RwLock<Option<Vec<Task>>>>,
}

impl MemorySnapshot {
    /// Create an empty in-memory snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory snapshot that already holds `tasks`
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Some(tasks))),
        }
    }

    /// Current contents, or `None` if nothing has been saved yet
    pub async fn contents(&self) -> Option<Vec<Task>> {
        self.contents.read().await.clone()
    }

    /// Replace the contents, as another writer of the same snapshot would
    pub async fn overwrite(&self, tasks: Vec<Task>) {
        *self.contents.write().await = Some(tasks);
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshot {
    async fn load(&self) -> crate::Result<Vec<Task>> {
        self.contents.read().await.clone().ok_or_else(|| {
            TaskListError::PersistenceUnavailable("snapshot has not been written".to_string())
        })
    }

    async fn save(&self, tasks: &[Task]) -> crate::Result<()> {
        *self.contents.write().await = Some(tasks.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
