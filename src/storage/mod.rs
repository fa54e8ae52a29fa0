/// Backend implementations
pub mod backend;

use crate::task::Task;
use async_trait::async_trait;

pub use backend::{FileSnapshot, MemorySnapshot};

/// Trait for stores that hold a full snapshot of the task list
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the whole task list from the snapshot
    async fn load(&self) -> crate::Result<Vec<Task>>;

    /// Overwrite the snapshot with the given task list
    async fn save(&self, tasks: &[Task]) -> crate::Result<()>;

    /// Human-readable location used in log lines
    fn describe(&self) -> String;
}
