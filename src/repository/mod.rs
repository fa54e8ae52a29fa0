//! Task repository
//!
//! The repository owns the task sequence and the next-identifier counter
//! behind a single async mutex, so every operation is atomic with respect
//! to every other. When a [`SnapshotStore`] is attached, the snapshot is
//! the source of truth: it is reloaded before each operation and rewritten
//! after each successful mutation, all while the guard is held.
//!
//! The counter itself is never persisted. Two processes sharing one
//! snapshot file can therefore hand out the same identifier.

use crate::config::{Config, PersistenceMode};
use crate::storage::{FileSnapshot, SnapshotStore};
use crate::task::{Task, TaskId};
use crate::TaskListError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

struct RepositoryState {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl RepositoryState {
    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Replace the sequence with a freshly loaded one without ever moving
    /// the counter backwards.
    ///
    /// A snapshot whose ids leave no room for another id is rejected and the
    /// current state is kept.
    fn replace(&mut self, tasks: Vec<Task>) -> crate::Result<()> {
        let max_id = tasks.iter().map(|task| task.id).max().unwrap_or(0);
        let after_max = max_id.checked_add(1).ok_or_else(|| {
            TaskListError::PersistenceUnavailable(format!(
                "snapshot id {max_id} leaves no room for new ids"
            ))
        })?;
        let after_len = TaskId::try_from(tasks.len())
            .unwrap_or(TaskId::MAX)
            .saturating_add(1);

        self.next_id = self.next_id.max(after_len).max(after_max);
        self.tasks = tasks;
        Ok(())
    }
}

/// Concurrency-safe store of task records
pub struct TaskRepository {
    state: Mutex<RepositoryState>,
    snapshot: Option<Arc<dyn SnapshotStore>>,
}

impl TaskRepository {
    /// Create an in-memory repository with no snapshot
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RepositoryState {
                tasks: Vec::new(),
                next_id: 1,
            }),
            snapshot: None,
        }
    }

    /// Create a repository kept in sync with the given snapshot store
    pub fn with_snapshot(snapshot: Arc<dyn SnapshotStore>) -> Self {
        info!("Task repository backed by snapshot {}", snapshot.describe());
        Self {
            snapshot: Some(snapshot),
            ..Self::new()
        }
    }

    /// Build the repository described by the configuration
    pub fn from_config(config: &Config) -> Self {
        match config.persistence {
            PersistenceMode::Memory => {
                info!("Task repository running in memory only");
                Self::new()
            }
            PersistenceMode::Snapshot => {
                Self::with_snapshot(Arc::new(FileSnapshot::new(&config.snapshot_path)))
            }
        }
    }

    /// Whether a snapshot store is attached
    pub fn is_persistent(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Return a copy of every task in sequence order
    pub async fn list(&self) -> Vec<Task> {
        let mut state = self.state.lock().await;
        self.reload(&mut state).await;
        state.tasks.clone()
    }

    /// Return the task with the given ID
    pub async fn get(&self, id: TaskId) -> crate::Result<Task> {
        let mut state = self.state.lock().await;
        self.reload(&mut state).await;
        state
            .position(id)
            .map(|index| state.tasks[index].clone())
            .ok_or(TaskListError::TaskNotFound(id))
    }

    /// Append a new task and return it with its assigned ID
    pub async fn create(&self, title: impl Into<String>) -> Task {
        let mut state = self.state.lock().await;
        self.reload(&mut state).await;

        let task = Task::new(state.next_id, title);
        // Only an exhausted id space stops the counter from moving.
        state.next_id = state.next_id.saturating_add(1);
        state.tasks.push(task.clone());
        debug!("Task {} created", task.id);

        self.persist(&state).await;
        task
    }

    /// Replace the title of an existing task
    pub async fn update(&self, id: TaskId, title: impl Into<String>) -> crate::Result<Task> {
        let mut state = self.state.lock().await;
        self.reload(&mut state).await;

        let index = state.position(id).ok_or(TaskListError::TaskNotFound(id))?;
        state.tasks[index].title = title.into();
        let task = state.tasks[index].clone();
        debug!("Task {} updated", id);

        self.persist(&state).await;
        Ok(task)
    }

    /// Remove a task, keeping the order of the rest
    pub async fn delete(&self, id: TaskId) -> crate::Result<()> {
        let mut state = self.state.lock().await;
        self.reload(&mut state).await;

        let index = state.position(id).ok_or(TaskListError::TaskNotFound(id))?;
        state.tasks.remove(index);
        debug!("Task {} deleted", id);

        self.persist(&state).await;
        Ok(())
    }

    async fn reload(&self, state: &mut RepositoryState) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };

        let loaded = snapshot.load().await.and_then(|tasks| state.replace(tasks));
        if let Err(e) = loaded {
            warn!("Keeping in-memory tasks: {}", e);
        }
    }

    async fn persist(&self, state: &RepositoryState) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };

        if let Err(e) = snapshot.save(&state.tasks).await {
            error!("Task change kept in memory only: {}", e);
        }
    }
}

impl Default for TaskRepository {
    fn default() -> Self {
        Self::new()
    }
}
