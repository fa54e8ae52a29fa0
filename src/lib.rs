//! Task List RS - a small task-list service over HTTP
//!
//! This library provides the task repository, an optional JSON snapshot
//! that keeps the repository in sync with a file on disk, a fire-and-forget
//! background job runner, and the axum routes that expose them.

/// HTTP routes and error responses
pub mod api;
/// Configuration management for the service
pub mod config;
/// Fire-and-forget background jobs
pub mod jobs;
/// Task repository and its concurrency guard
pub mod repository;
/// Snapshot stores backing the repository
pub mod storage;
/// Task record definition
pub mod task;

pub use crate::config::Config;
pub use jobs::BackgroundJobRunner;
pub use repository::TaskRepository;
pub use task::{Task, TaskId};

use thiserror::Error;

/// Result type for task list operations
pub type Result<T> = std::result::Result<T, TaskListError>;

/// Error types for the task list service
#[derive(Error, Debug)]
pub enum TaskListError {
    /// Request body or identifier could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Task with the specified ID was not found
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    /// Snapshot could not be read or written
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// A background job failed
    #[error("Job execution failed: {0}")]
    ExecutionFailed(String),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The HTTP server failed to bind or serve
    #[error("Server error: {0}")]
    ServerError(String),
}
